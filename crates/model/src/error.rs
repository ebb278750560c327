//! Errors raised when constructing a latent factor model.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// User and item factor matrices must have the same number of columns
    #[error("Feature dimension mismatch: user factors have {user} columns, item factors have {item}")]
    FeatureMismatch { user: usize, item: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
