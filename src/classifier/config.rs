//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureConfig;
use crate::error::Result;
use crate::model::PruningConfig;

/// How per-class scores are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// `ln(prior) + Σ ln P(token | class)`; immune to underflow.
    #[default]
    LogSpace,
    /// `prior * Π P(token | class)`; underflows to zero on long documents.
    Product,
}

/// Configuration for [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Feature extraction pipeline.
    pub features: FeatureConfig,
    /// Score accumulation.
    pub scoring: ScoringMode,
    /// Post-training pruning; disabled when `None`.
    pub pruning: Option<PruningConfig>,
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        if let Some(pruning) = &config.pruning {
            pruning.validate()?;
        }
        Ok(config)
    }
}
