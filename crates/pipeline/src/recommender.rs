//! # Recommender
//!
//! Turns a trained model into a top-K list per user:
//! 1. Every item is a candidate
//! 2. Items the user already rated are dropped, then any extra filters run
//! 3. Each remaining candidate is scored with `predict(user, item)`
//! 4. Candidates are ranked by descending score and cut to K
//!
//! ## Ranking
//! Ties on score are broken by ascending item id, so a fixed model always
//! yields the same list. Scores are compared with `f64::total_cmp`, which
//! keeps the order total even when a diverged model produces NaN.

use crate::candidate::{Candidate, UserContext};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::AlreadyRatedFilter;
use crate::traits::Filter;
use anyhow::{Result, anyhow, ensure};
use data_loader::{ItemId, RatingStore, UserId};
use model::LatentFactorModel;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Default length of a recommendation list
pub const DEFAULT_TOP_K: usize = 10;

/// Ranks un-rated items for each user with a trained model.
///
/// Holds only shared borrows of the model and the store: while a
/// Recommender exists, the model can't be mutated.
///
/// Rated items are always excluded. The filter pipeline can only narrow
/// the remaining candidates further.
pub struct Recommender<'a> {
    model: &'a LatentFactorModel,
    store: &'a RatingStore,
    exclusion: AlreadyRatedFilter,
    filter_pipeline: FilterPipeline,
    top_k: usize,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over a trained model.
    ///
    /// The model must have been trained on `store` (same user and item counts).
    pub fn new(model: &'a LatentFactorModel, store: &'a RatingStore) -> Result<Self> {
        ensure!(
            model.n_users() == store.n_users() && model.n_items() == store.n_items(),
            "Model shape {}x{} does not match {} users and {} items in the rating store",
            model.n_users(),
            model.n_items(),
            store.n_users(),
            store.n_items()
        );
        ensure!(
            store.n_users() <= UserId::MAX as usize && store.n_items() <= ItemId::MAX as usize,
            "Rating store with {} users and {} items exceeds the 32-bit id range",
            store.n_users(),
            store.n_items()
        );
        Ok(Self {
            model,
            store,
            exclusion: AlreadyRatedFilter,
            filter_pipeline: FilterPipeline::new(),
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Configure the list length (default: 10)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Extra filters, applied after rated items have been excluded
    pub fn with_filter_pipeline(mut self, filter_pipeline: FilterPipeline) -> Self {
        self.filter_pipeline = filter_pipeline;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Recommendations for one user, best first
    #[instrument(skip(self))]
    pub fn recommend(&self, user_id: UserId) -> Result<Vec<Candidate>> {
        let rated_items = self
            .store
            .rated_by_user(user_id)
            .ok_or_else(|| anyhow!("User {} not found", user_id))?;
        let context = UserContext::new(user_id, rated_items);

        // Step 1: every item is a candidate
        let candidates: Vec<Candidate> = (0..self.store.n_items())
            .map(|item| Candidate::new(item as ItemId))
            .collect();

        // Step 2: filter
        let candidates = self.exclusion.apply(candidates, &context)?;
        let mut candidates = self.filter_pipeline.apply(candidates, &context)?;

        // Step 3: score what's left
        let user = user_id as usize;
        for candidate in &mut candidates {
            candidate.score = self.model.predict(user, candidate.item_id as usize);
        }

        // Step 4: rank
        let ranked = rank_top_k(candidates, self.top_k);
        debug!("Ranked {} candidates for user {}", ranked.len(), user_id);
        Ok(ranked)
    }

    /// Recommendations for every user, indexed by user id
    pub fn recommend_all(&self) -> Result<Vec<Vec<Candidate>>> {
        info!("Generating recommendations for {} users", self.store.n_users());
        (0..self.store.n_users())
            .map(|user| self.recommend(user as UserId))
            .collect()
    }

    /// Same output as `recommend_all`, with users spread across rayon's
    /// thread pool. Only reads the model.
    pub fn recommend_all_parallel(&self) -> Result<Vec<Vec<Candidate>>> {
        info!(
            "Generating recommendations for {} users in parallel",
            self.store.n_users()
        );
        (0..self.store.n_users())
            .into_par_iter()
            .map(|user| self.recommend(user as UserId))
            .collect()
    }
}

/// Ranking order: higher score first, then lower item id
fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item_id.cmp(&b.item_id))
}

/// Sort candidates best-first and keep at most `k`
pub fn rank_top_k(mut candidates: Vec<Candidate>, k: usize) -> Vec<Candidate> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(k);
    candidates
}
