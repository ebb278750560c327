//! Candidate and per-user context types shared by the filters and the
//! recommender.

use data_loader::{ItemId, UserId};
use std::collections::HashSet;

/// An item under consideration for a user's recommendation list.
///
/// Candidates start unscored (`score == 0.0`) and get their predicted
/// score once filtering is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub item_id: ItemId,
    pub score: f64,
}

impl Candidate {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id, score: 0.0 }
    }

    pub fn with_score(item_id: ItemId, score: f64) -> Self {
        Self { item_id, score }
    }
}

/// What the filters know about the user being served.
///
/// Borrows the rated-item set straight from the RatingStore, so building
/// a context never copies the user's history.
#[derive(Debug, Clone, Copy)]
pub struct UserContext<'a> {
    pub user_id: UserId,
    pub rated_items: &'a HashSet<ItemId>,
}

impl<'a> UserContext<'a> {
    pub fn new(user_id: UserId, rated_items: &'a HashSet<ItemId>) -> Self {
        Self {
            user_id,
            rated_items,
        }
    }
}
