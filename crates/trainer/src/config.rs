//! Training hyperparameters.
//!
//! Defaults reproduce the fixed setup: 10 features, 20 epochs, a constant
//! learning rate of 0.1, entropy-seeded initialization and no early stop.
//! Every field can be overridden from a JSON config or builder calls.

use crate::error::{Result, TrainerError};
use model::DEFAULT_FEATURES;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EPOCHS: usize = 20;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Hyperparameters for SGD training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Length of every user/item feature vector (k)
    pub n_features: usize,
    /// Number of passes over the ratings
    pub max_epochs: usize,
    /// Fixed step size (alpha), no decay
    pub learning_rate: f64,
    /// `Some` for reproducible runs, `None` for entropy-based initialization
    pub seed: Option<u64>,
    /// Opt-in plateau detection. `None` always runs `max_epochs`.
    pub early_stop: Option<EarlyStopConfig>,
}

/// Stop once the epoch error stops improving.
///
/// Training ends after `patience` consecutive epochs whose total error is
/// not at least `min_delta` below the best error seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarlyStopConfig {
    pub patience: usize,
    pub min_delta: f64,
}

impl Default for EarlyStopConfig {
    fn default() -> Self {
        Self {
            patience: 3,
            min_delta: 1e-4,
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            n_features: DEFAULT_FEATURES,
            max_epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
            early_stop: None,
        }
    }
}

impl TrainingConfig {
    pub fn with_features(mut self, n_features: usize) -> Self {
        self.n_features = n_features;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_early_stop(mut self, early_stop: Option<EarlyStopConfig>) -> Self {
        self.early_stop = early_stop;
        self
    }

    /// Reject configs training can't run with.
    ///
    /// Large learning rates are allowed even though they can diverge.
    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(TrainerError::InvalidConfig(
                "n_features must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TrainerError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if let Some(early_stop) = &self.early_stop {
            if early_stop.patience == 0 {
                return Err(TrainerError::InvalidConfig(
                    "early_stop.patience must be at least 1".to_string(),
                ));
            }
            if !early_stop.min_delta.is_finite() || early_stop.min_delta < 0.0 {
                return Err(TrainerError::InvalidConfig(format!(
                    "early_stop.min_delta must be a non-negative number, got {}",
                    early_stop.min_delta
                )));
            }
        }
        Ok(())
    }
}
