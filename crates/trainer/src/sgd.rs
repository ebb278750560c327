//! Epoch-based stochastic gradient descent over the rating store.
//!
//! ## Algorithm
//! For every epoch, visit the ratings in insertion order (no shuffling).
//! For a rating (u, i, a):
//! 1. `err = predict(u, i) - a`
//! 2. accumulate `err^2` into the epoch error
//! 3. for each feature f:
//!    - `P[u][f] += alpha * (-2 * err * Q[i][f])`
//!    - `Q[i][f] += alpha * (-2 * err * P[u][f])`
//!
//! Both gradients of a feature use the values from before that rating's
//! update. Updates are visible to the next rating straight away.
//!
//! There is no regularization, no learning-rate decay and no guard against
//! divergence: a large learning rate can blow the factors up to inf/NaN.

use crate::config::TrainingConfig;
use crate::error::{Result, TrainerError};
use crate::report::{EpochStats, TrainingReport};
use data_loader::RatingStore;
use model::{LatentFactorModel, build_rng};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Trains a latent factor model from observed ratings
#[derive(Debug, Clone, Default)]
pub struct SgdTrainer {
    config: TrainingConfig,
}

impl SgdTrainer {
    /// Create a trainer, validating the config up front
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Initialize a model from the configured seed and train it
    pub fn fit(&self, store: &RatingStore) -> Result<(LatentFactorModel, TrainingReport)> {
        let mut rng = build_rng(self.config.seed);
        self.fit_with_rng(store, &mut rng)
    }

    /// Initialize a model from the given rng and train it
    pub fn fit_with_rng<R: Rng>(
        &self,
        store: &RatingStore,
        rng: &mut R,
    ) -> Result<(LatentFactorModel, TrainingReport)> {
        let mut model =
            LatentFactorModel::random(store.n_users(), store.n_items(), self.config.n_features, rng);
        let report = self.train(&mut model, store)?;
        Ok((model, report))
    }

    /// Run up to `max_epochs` epochs on an existing model
    #[instrument(skip(self, model, store), fields(ratings = store.ratings().len()))]
    pub fn train(&self, model: &mut LatentFactorModel, store: &RatingStore) -> Result<TrainingReport> {
        if model.n_users() != store.n_users() || model.n_items() != store.n_items() {
            return Err(TrainerError::ShapeMismatch {
                model_users: model.n_users(),
                model_items: model.n_items(),
                store_users: store.n_users(),
                store_items: store.n_items(),
            });
        }

        let start = Instant::now();
        let mut report = TrainingReport::default();
        let mut best_error = f64::INFINITY;
        let mut stale_epochs = 0;

        for epoch in 1..=self.config.max_epochs {
            let epoch_start = Instant::now();
            let total_error = self.run_epoch(model, store);
            let elapsed_ms = epoch_start.elapsed().as_millis() as u64;

            debug!(
                "Completed epoch {} in {} ms, total error = {:.6}",
                epoch, elapsed_ms, total_error
            );
            report.epochs.push(EpochStats {
                epoch,
                total_error,
                elapsed_ms,
            });

            if let Some(early_stop) = &self.config.early_stop {
                if total_error < best_error - early_stop.min_delta {
                    best_error = total_error;
                    stale_epochs = 0;
                } else {
                    stale_epochs += 1;
                }

                if stale_epochs >= early_stop.patience && epoch < self.config.max_epochs {
                    info!(
                        "Error plateaued for {} epochs, stopping after epoch {}",
                        stale_epochs, epoch
                    );
                    report.stopped_early = true;
                    break;
                }
            }
        }

        info!(
            "Training finished: {} epochs in {:?}, final error = {:?}",
            report.epochs_run(),
            start.elapsed(),
            report.final_error()
        );
        Ok(report)
    }

    /// One pass over every rating in insertion order.
    ///
    /// Returns the epoch's total squared error, measured before each update.
    pub fn run_epoch(&self, model: &mut LatentFactorModel, store: &RatingStore) -> f64 {
        let alpha = self.config.learning_rate;
        let n_features = model.n_features();
        let mut total_error = 0.0;

        for rating in store.ratings() {
            let user = rating.user_id as usize;
            let item = rating.item_id as usize;

            let err = model.predict(user, item) - rating.score;
            total_error += err * err;

            for f in 0..n_features {
                // P[u][f] and Q[i][f] are both read before either is written
                let grad_p = -2.0 * err * model.item_row(item)[f];
                let grad_q = -2.0 * err * model.user_row(user)[f];
                model.update_user(user, f, alpha * grad_p);
                model.update_item(item, f, alpha * grad_q);
            }
        }

        total_error
    }
}
