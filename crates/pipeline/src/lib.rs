//! Pipeline for turning a trained model into ranked recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Recommender for scoring and top-K ranking
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Every item becomes a candidate for the user
//! 2. Filters remove unwanted candidates (already rated)
//! 3. The latent factor model scores the remaining candidates
//! 4. Candidates are ranked and cut to the top K
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::Recommender;
//!
//! let recommender = Recommender::new(&model, &store)?.with_top_k(10);
//! let recs = recommender.recommend(user_id)?;
//! let all = recommender.recommend_all()?;
//! ```

pub mod candidate;
pub mod filter_pipeline;
pub mod filters;
pub mod recommender;
pub mod traits;

// Re-export main types
pub use candidate::{Candidate, UserContext};
pub use filter_pipeline::FilterPipeline;
pub use recommender::{DEFAULT_TOP_K, Recommender, rank_top_k};
pub use traits::Filter;
