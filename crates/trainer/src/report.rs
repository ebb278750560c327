//! Per-epoch training diagnostics.
//!
//! The error history is for inspection only: apart from the opt-in early
//! stop, nothing in training reads it.

use serde::{Deserialize, Serialize};

/// Outcome of one pass over the ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number
    pub epoch: usize,
    /// Sum of squared residuals, each measured before that rating's update
    pub total_error: f64,
    pub elapsed_ms: u64,
}

/// Error history of a whole training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub epochs: Vec<EpochStats>,
    /// True when the early-stop rule ended training before `max_epochs`
    pub stopped_early: bool,
}

impl TrainingReport {
    pub fn epochs_run(&self) -> usize {
        self.epochs.len()
    }

    pub fn first_error(&self) -> Option<f64> {
        self.epochs.first().map(|e| e.total_error)
    }

    pub fn final_error(&self) -> Option<f64> {
        self.epochs.last().map(|e| e.total_error)
    }

    /// Lowest epoch error seen
    pub fn best_error(&self) -> Option<f64> {
        self.epochs
            .iter()
            .map(|e| e.total_error)
            .min_by(|a, b| a.total_cmp(b))
    }
}
