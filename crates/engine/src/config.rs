//! Engine configuration: training hyperparameters plus ranking options.
//!
//! Loadable from a JSON file; any missing field takes its default.
//!
//! ```json
//! {
//!   "training": { "seed": 42, "max_epochs": 20 },
//!   "top_k": 10,
//!   "parallel": false
//! }
//! ```

use anyhow::{Context, Result};
use pipeline::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use trainer::TrainingConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub training: TrainingConfig,
    /// Maximum recommendations per user
    pub top_k: usize,
    /// Rank users on rayon's thread pool (training stays single-threaded)
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            training: TrainingConfig::default(),
            top_k: DEFAULT_TOP_K,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Read a config from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn with_training(mut self, training: TrainingConfig) -> Self {
        self.training = training;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
