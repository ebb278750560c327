//! # Recommendation Engine
//!
//! This module coordinates the whole batch job:
//! 1. Load the rating stream into a RatingStore
//! 2. Train the latent factor model with SGD
//! 3. Rank un-rated books for every user
//! 4. Write one line per user
//!
//! The stages run strictly in that order. Training hands back the model
//! only after its last epoch, and the recommender only borrows it, so
//! recommendations always come from the final model.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::EngineConfig;
use crate::output::write_recommendations;
use data_loader::RatingStore;
use model::LatentFactorModel;
use pipeline::{Candidate, Recommender};
use trainer::{SgdTrainer, TrainingReport};

/// What a run did, for logging and the CLI's reports
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub users: usize,
    pub items: usize,
    pub ratings: usize,
    pub report: TrainingReport,
}

/// Runs load → train → recommend → write
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse and validate the input stream
    pub fn load<R: BufRead>(&self, input: R) -> Result<RatingStore> {
        RatingStore::load_from_reader(input).context("Failed to load ratings")
    }

    /// Fit a fresh model to the store
    pub fn train(&self, store: &RatingStore) -> Result<(LatentFactorModel, TrainingReport)> {
        let trainer =
            SgdTrainer::new(self.config.training.clone()).context("Invalid training configuration")?;
        let fitted = trainer.fit(store).context("Training failed")?;
        Ok(fitted)
    }

    /// Top-K lists for every user, indexed by user id
    pub fn recommend(&self, model: &LatentFactorModel, store: &RatingStore) -> Result<Vec<Vec<Candidate>>> {
        let recommender = Recommender::new(model, store)?.with_top_k(self.config.top_k);
        if self.config.parallel {
            recommender.recommend_all_parallel()
        } else {
            recommender.recommend_all()
        }
    }

    /// Main entry point: the whole batch job from input stream to output stream
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<RunSummary> {
        let start_time = Instant::now();

        let store = self.load(input)?;
        let (users, items, ratings) = store.counts();
        info!("Loaded {} ratings ({} users, {} books)", ratings, users, items);

        let (model, report) = self.train(&store)?;
        info!(
            "Trained {} features over {} epochs",
            model.n_features(),
            report.epochs_run()
        );

        let recommendations = self.recommend(&model, &store)?;
        write_recommendations(output, &recommendations).context("Failed to write recommendations")?;

        info!(
            "Wrote recommendations for {} users in {:?}",
            recommendations.len(),
            start_time.elapsed()
        );

        Ok(RunSummary {
            users,
            items,
            ratings,
            report,
        })
    }
}
