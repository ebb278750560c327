//! Errors for the trainer crate.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TrainerError {
    /// A hyperparameter that training can't run with
    #[error("Invalid training config: {0}")]
    InvalidConfig(String),

    /// Model and rating store disagree on the number of users or items
    #[error("Model has shape {model_users}x{model_items} but the ratings cover {store_users} users and {store_items} items")]
    ShapeMismatch {
        model_users: usize,
        model_items: usize,
        store_users: usize,
        store_items: usize,
    },
}

pub type Result<T> = std::result::Result<T, TrainerError>;
