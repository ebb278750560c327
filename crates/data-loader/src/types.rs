//! Core domain types for the rating stream.
//!
//! Users and books ("items") have no attributes beyond their identity, so
//! they are plain integer ids. A rating ties the two together with a score
//! normalized from the raw 1-5 scale into [0, 1].

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with item IDs

/// Identifier for a user, dense in `[0, n_users)`
pub type UserId = u32;

/// Identifier for an item (a book), dense in `[0, n_items)`
pub type ItemId = u32;

/// Top of the raw rating scale. Raw scores are divided by this on ingestion.
pub const MAX_RAW_SCORE: f64 = 5.0;

/// Normalize a raw score from the 1-5 scale.
///
/// No clamping: a raw score outside the conventional range maps outside [0, 1].
pub fn normalize_score(raw_score: f64) -> f64 {
    raw_score / MAX_RAW_SCORE
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single observed rating.
///
/// Ratings are immutable once ingested. Duplicates for the same
/// (user, item) pair are allowed and each one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// Score as it appeared in the input
    pub raw_score: f64,
    /// `raw_score / 5.0`, the training target
    pub score: f64,
}

impl Rating {
    /// Build a rating from a raw score, normalizing it
    pub fn new(user_id: UserId, item_id: ItemId, raw_score: f64) -> Self {
        Self {
            user_id,
            item_id,
            raw_score,
            score: normalize_score(raw_score),
        }
    }
}

// =============================================================================
// Input Header
// =============================================================================

/// First line of the input: `nRatings nUsers nBooks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputHeader {
    pub n_ratings: usize,
    pub n_users: usize,
    pub n_items: usize,
}
