//! Text analysis for feature extraction.
//!
//! Tokenizers split a document into words, token filters clean, normalize and
//! combine them, analyzers chain the two, and [`features`] turns an analyzer
//! into the [`FeatureExtractor`](features::FeatureExtractor) shared by the
//! trainer and the classifier.

pub mod analyzer;
pub mod features;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
