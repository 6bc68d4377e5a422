//! # bayespam
//!
//! A Naive Bayes spam filter for plain text email bodies.
//!
//! ## Features
//!
//! - Composable text analysis pipeline (tokenizer, token filters, n-grams)
//! - English noun lemmatization or Snowball stemming
//! - Laplace-smoothed per-class frequency model
//! - Log-space or product scoring, ties resolved to ham
//! - Sequential or sharded parallel training
//! - Seeded corpus splitting and accuracy reporting

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod training;

pub mod prelude {
    pub use crate::analysis::features::{FeatureConfig, FeatureExtractor, FeatureStrategy};
    pub use crate::classifier::{ClassifierConfig, NaiveBayesClassifier, ScoringMode};
    pub use crate::document::{Document, Label};
    pub use crate::error::{BayespamError, Result};
    pub use crate::model::FrequencyModel;
    pub use crate::training::Trainer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
