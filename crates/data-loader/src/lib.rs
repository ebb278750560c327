//! # Data Loader Crate
//!
//! This crate turns the whitespace-separated rating input into a
//! [`RatingStore`]: the observed (user, item, score) triples in insertion
//! order, plus the set of items each user has already rated.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (UserId, ItemId, Rating, InputHeader)
//! - **store**: The RatingStore and its `ingest` operation
//! - **parser**: Parse header and rating lines
//! - **loader**: Build a RatingStore from a reader or file
//! - **generator**: Write synthetic inputs for testing and benchmarks
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RatingStore;
//! use std::io::Cursor;
//!
//! let store = RatingStore::load_from_reader(Cursor::new("1 2 3\n0 2 4\n"))?;
//! let (users, items, ratings) = store.counts();
//! assert!(store.rated_by_user(0).unwrap().contains(&2));
//! ```

// Public modules
pub mod error;
pub mod generator;
pub mod loader;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use generator::write_synthetic_input;
pub use store::RatingStore;
pub use types::{InputHeader, ItemId, MAX_RAW_SCORE, Rating, UserId, normalize_score};
