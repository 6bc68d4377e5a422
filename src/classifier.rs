//! Naive Bayes spam/ham classification.
//!
//! # Architecture
//!
//! - [`ClassifierConfig`]: feature strategy, scoring mode and optional pruning
//! - [`NaiveBayesClassifier`]: owns the feature extractor, the trainer and the
//!   frequency model; trains once, then answers read-only queries
//! - [`ClassScores`]: the per-class scores behind a decision
//!
//! # Example
//!
//! ```
//! use bayespam::classifier::{ClassifierConfig, NaiveBayesClassifier};
//! use bayespam::document::{Document, Label};
//!
//! # fn main() -> bayespam::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(&ClassifierConfig::default())?;
//! classifier.train(&[
//!     Document::spam("buy cheap pills now"),
//!     Document::ham("meeting schedule tomorrow"),
//! ])?;
//!
//! assert_eq!(classifier.classify("buy cheap pills")?, Label::Spam);
//! assert_eq!(classifier.classify("meeting schedule")?, Label::Ham);
//! # Ok(())
//! # }
//! ```

mod config;
mod naive_bayes;

pub use config::{ClassifierConfig, ScoringMode};
pub use naive_bayes::{ClassScores, NaiveBayesClassifier};
