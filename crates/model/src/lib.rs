//! # Model Crate
//!
//! The latent factor model behind the recommendations: a user matrix `P`
//! and an item matrix `Q`, each row a fixed-length feature vector. A
//! predicted score is the inner product of a user row and an item row.
//!
//! ## Components
//!
//! - **factors**: [`LatentFactorModel`] with `predict` and the in-place
//!   cell updates used by the trainer
//! - **init**: Building a seeded or entropy-based random number generator
//! - **error**: Construction errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{LatentFactorModel, build_rng};
//!
//! let mut rng = build_rng(Some(42));
//! let model = LatentFactorModel::random(n_users, n_items, 10, &mut rng);
//! let score = model.predict(0, 3);
//! ```

pub mod error;
pub mod factors;
pub mod init;

pub use error::{ModelError, Result};
pub use factors::{DEFAULT_FEATURES, LatentFactorModel};
pub use init::build_rng;
