//! The latent factor model: one feature vector per user and per item.
//!
//! ```text
//!   P: n_users x k        Q: n_items x k
//!   predict(u, i) = P[u] . Q[i]
//! ```
//!
//! Factors start as independent Uniform[0,1) draws. They are not centered,
//! which biases early predictions toward positive values.

use crate::error::{ModelError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::Rng;
use tracing::debug;

/// Default number of latent features per row
pub const DEFAULT_FEATURES: usize = 10;

/// Dense user and item factor matrices.
///
/// Only the trainer mutates the factors (via `update_user`/`update_item`);
/// everything else reads through `predict` and the view accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct LatentFactorModel {
    user_factors: Array2<f64>,
    item_factors: Array2<f64>,
}

impl LatentFactorModel {
    /// Create a model with every cell drawn from Uniform[0,1).
    ///
    /// Cells are drawn row-major, all of `P` before `Q`, so a seeded rng
    /// always produces the same model for the same shape.
    pub fn random<R: Rng>(n_users: usize, n_items: usize, n_features: usize, rng: &mut R) -> Self {
        debug!(
            "Initializing factors: {} users, {} items, {} features",
            n_users, n_items, n_features
        );
        let user_factors = Array2::from_shape_simple_fn((n_users, n_features), || rng.random::<f64>());
        let item_factors = Array2::from_shape_simple_fn((n_items, n_features), || rng.random::<f64>());
        Self {
            user_factors,
            item_factors,
        }
    }

    /// Create a model from explicit factor matrices
    pub fn from_factors(user_factors: Array2<f64>, item_factors: Array2<f64>) -> Result<Self> {
        if user_factors.ncols() != item_factors.ncols() {
            return Err(ModelError::FeatureMismatch {
                user: user_factors.ncols(),
                item: item_factors.ncols(),
            });
        }
        Ok(Self {
            user_factors,
            item_factors,
        })
    }

    /// Predicted (normalized) rating of `item` by `user`: the inner product
    /// of their factor rows. O(k).
    ///
    /// # Panics
    /// If either id is out of range.
    pub fn predict(&self, user: usize, item: usize) -> f64 {
        self.user_factors.row(user).dot(&self.item_factors.row(item))
    }

    /// Add `delta` to feature `feature` of a user's row
    pub fn update_user(&mut self, user: usize, feature: usize, delta: f64) {
        self.user_factors[[user, feature]] += delta;
    }

    /// Add `delta` to feature `feature` of an item's row
    pub fn update_item(&mut self, item: usize, feature: usize, delta: f64) {
        self.item_factors[[item, feature]] += delta;
    }

    pub fn user_row(&self, user: usize) -> ArrayView1<'_, f64> {
        self.user_factors.row(user)
    }

    pub fn item_row(&self, item: usize) -> ArrayView1<'_, f64> {
        self.item_factors.row(item)
    }

    /// The full `P` matrix
    pub fn user_factors(&self) -> ArrayView2<'_, f64> {
        self.user_factors.view()
    }

    /// The full `Q` matrix
    pub fn item_factors(&self) -> ArrayView2<'_, f64> {
        self.item_factors.view()
    }

    pub fn n_users(&self) -> usize {
        self.user_factors.nrows()
    }

    pub fn n_items(&self) -> usize {
        self.item_factors.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.user_factors.ncols()
    }
}
