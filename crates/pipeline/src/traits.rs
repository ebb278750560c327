//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::candidate::{Candidate, UserContext};
use anyhow::Result;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a pipeline be shared across rayon workers
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - The user being served and their rated items
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext<'_>) -> Result<Vec<Candidate>>;
}
