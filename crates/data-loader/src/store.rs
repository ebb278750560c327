//! RatingStore - the in-memory record of every observed rating.
//!
//! The store holds two things:
//! - every rating, in insertion order (training replays them in this order)
//! - per user, the set of items already rated (recommendations exclude them)
//!
//! It is populated once at ingestion and only read afterwards.

use crate::error::{DataLoadError, Result};
use crate::types::{InputHeader, ItemId, Rating, UserId};
use std::collections::{HashMap, HashSet};

/// Upper bound on how many ratings `with_header` reserves room for up
/// front. A header can declare any count, the store still only grows as
/// ratings arrive.
const MAX_PREALLOCATED_RATINGS: usize = 1 << 20;

/// Observed ratings plus the per-user rated-item index.
///
/// Only users with at least one rating have an entry in `rated_by_user`;
/// every other valid user reads back the shared empty set.
#[derive(Debug, Clone)]
pub struct RatingStore {
    n_users: usize,
    n_items: usize,
    ratings: Vec<Rating>,
    rated_by_user: HashMap<UserId, HashSet<ItemId>>,
    no_ratings: HashSet<ItemId>,
}

impl RatingStore {
    /// Creates an empty store for `n_users` users and `n_items` items
    pub fn new(n_users: usize, n_items: usize) -> Self {
        Self {
            n_users,
            n_items,
            ratings: Vec::new(),
            rated_by_user: HashMap::new(),
            no_ratings: HashSet::new(),
        }
    }

    /// Creates an empty store sized from an input header, with room for
    /// the declared number of ratings (capped)
    pub fn with_header(header: &InputHeader) -> Self {
        let mut store = Self::new(header.n_users, header.n_items);
        store
            .ratings
            .reserve(header.n_ratings.min(MAX_PREALLOCATED_RATINGS));
        store
    }

    /// Record one rating.
    ///
    /// `raw_score` is on the 1-5 scale and is stored normalized. Ids must
    /// be inside the declared ranges and the score must be finite.
    pub fn ingest(&mut self, user_id: UserId, item_id: ItemId, raw_score: f64) -> Result<()> {
        if user_id as usize >= self.n_users {
            return Err(DataLoadError::IdOutOfRange {
                entity: "User",
                id: user_id,
                bound: self.n_users,
            });
        }
        if item_id as usize >= self.n_items {
            return Err(DataLoadError::IdOutOfRange {
                entity: "Item",
                id: item_id,
                bound: self.n_items,
            });
        }
        if !raw_score.is_finite() {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: raw_score.to_string(),
            });
        }

        self.ratings.push(Rating::new(user_id, item_id, raw_score));
        self.rated_by_user.entry(user_id).or_default().insert(item_id);
        Ok(())
    }

    /// All ratings in insertion order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Items already rated by a user.
    ///
    /// Returns `None` only when `user_id` is outside `[0, n_users)`.
    pub fn rated_by_user(&self, user_id: UserId) -> Option<&HashSet<ItemId>> {
        if user_id as usize >= self.n_users {
            return None;
        }
        Some(self.rated_by_user.get(&user_id).unwrap_or(&self.no_ratings))
    }

    pub fn n_users(&self) -> usize {
        self.n_users
    }

    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Get counts for debugging/validation: (users, items, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.n_users, self.n_items, self.ratings.len())
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
