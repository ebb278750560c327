//! Engine crate for the book recommendation batch job.
//!
//! This crate wires the other crates together: it loads the ratings,
//! trains the model, ranks books for every user and writes the output.

pub mod config;
pub mod orchestrator;
pub mod output;

pub use config::EngineConfig;
pub use orchestrator::{RecommendationEngine, RunSummary};
pub use output::{format_line, write_recommendations};
