//! # Trainer Crate
//!
//! Fits a [`model::LatentFactorModel`] to the observed ratings with
//! epoch-based stochastic gradient descent.
//!
//! ## Components
//!
//! - **config**: [`TrainingConfig`] hyperparameters (features, epochs,
//!   learning rate, seed, opt-in early stop)
//! - **sgd**: [`SgdTrainer`], the training loop
//! - **report**: Per-epoch error history
//!
//! ## Example Usage
//!
//! ```ignore
//! use trainer::{SgdTrainer, TrainingConfig};
//!
//! let trainer = SgdTrainer::new(TrainingConfig::default().with_seed(Some(42)))?;
//! let (model, report) = trainer.fit(&store)?;
//! println!("final error: {:?}", report.final_error());
//! ```
//!
//! Training is a single synchronous loop. The trainer owns the model while
//! it mutates it and hands it back only once every epoch has run, so nothing
//! downstream can observe a partially trained model.

pub mod config;
pub mod error;
pub mod report;
pub mod sgd;

pub use config::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, EarlyStopConfig, TrainingConfig};
pub use error::{Result, TrainerError};
pub use report::{EpochStats, TrainingReport};
pub use sgd::SgdTrainer;
