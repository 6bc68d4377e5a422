//! Feature extraction strategies.
//!
//! A [`FeatureExtractor`] turns a document body into the sequence of features
//! that the trainer counts and the classifier scores. The same extractor
//! instance must serve both sides so training and inference see identical
//! features.
//!
//! Every built-in strategy shares the word normalization chain
//!
//! ```text
//! Whitespace → MinLength → Alphanumeric → Lemma
//! ```
//!
//! and differs only in the n-grams appended after the unigrams:
//!
//! | Strategy               | Appended features        |
//! |------------------------|--------------------------|
//! | `UnigramBigram`        | word bigrams (default)   |
//! | `UnigramTrigram`       | word trigrams            |
//! | `UnigramCharBigram`    | character bigrams        |
//! | `UnigramCharTrigram`   | character trigrams       |
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::features::{FeatureConfig, FeatureExtractor};
//!
//! let extractor = FeatureConfig::default().build().unwrap();
//! let features = extractor.extract("buy cheap pills now").unwrap();
//!
//! assert_eq!(features, vec!["buy", "cheap", "pill", "now", "buy cheap", "cheap pill"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::char_ngram::CharNgramFilter;
use crate::analysis::token_filter::lemma::{
    EnglishLemmatizer, IdentityLemmatizer, LemmaFilter, Lemmatizer, SnowballLemmatizer,
};
use crate::analysis::token_filter::min_length::{DEFAULT_MIN_LENGTH, MinLengthFilter};
use crate::analysis::token_filter::shingle::ShingleFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{BayespamError, Result};

/// Capability of turning text into classification features.
pub trait FeatureExtractor: Send + Sync {
    /// Extract the features of `text`, unigrams first, in a stable order.
    fn extract(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract features from raw bytes, which must be valid UTF-8.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            BayespamError::malformed_input(format!("document is not valid UTF-8: {e}"))
        })?;
        self.extract(text)
    }
}

impl FeatureExtractor for PipelineAnalyzer {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    fn name(&self) -> &str {
        Analyzer::name(self)
    }
}

/// Which n-grams are appended after the unigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStrategy {
    /// Unigrams followed by word bigrams.
    #[default]
    UnigramBigram,
    /// Unigrams followed by word trigrams.
    UnigramTrigram,
    /// Unigrams followed by character bigrams.
    UnigramCharBigram,
    /// Unigrams followed by character trigrams.
    UnigramCharTrigram,
}

impl FeatureStrategy {
    fn ngram_filter(self) -> Arc<dyn Filter> {
        match self {
            FeatureStrategy::UnigramBigram => Arc::new(ShingleFilter::bigram()),
            FeatureStrategy::UnigramTrigram => Arc::new(ShingleFilter::trigram()),
            FeatureStrategy::UnigramCharBigram => Arc::new(CharNgramFilter::bigram()),
            FeatureStrategy::UnigramCharTrigram => Arc::new(CharNgramFilter::trigram()),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FeatureStrategy::UnigramBigram => "unigram_bigram",
            FeatureStrategy::UnigramTrigram => "unigram_trigram",
            FeatureStrategy::UnigramCharBigram => "unigram_char_bigram",
            FeatureStrategy::UnigramCharTrigram => "unigram_char_trigram",
        }
    }
}

/// How words are reduced to a base form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    /// English noun lemmatization.
    #[default]
    Lemma,
    /// English Snowball stemming.
    Snowball,
    /// No normalization.
    Identity,
}

impl NormalizerKind {
    fn lemmatizer(self) -> Arc<dyn Lemmatizer> {
        match self {
            NormalizerKind::Lemma => Arc::new(EnglishLemmatizer::new()),
            NormalizerKind::Snowball => Arc::new(SnowballLemmatizer::new()),
            NormalizerKind::Identity => Arc::new(IdentityLemmatizer::new()),
        }
    }
}

/// Configuration of the feature extraction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// N-grams appended after the unigrams.
    pub strategy: FeatureStrategy,
    /// Raw words shorter than this many characters are discarded.
    pub min_word_length: usize,
    /// Word normalization.
    pub normalizer: NormalizerKind,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            strategy: FeatureStrategy::UnigramBigram,
            min_word_length: DEFAULT_MIN_LENGTH,
            normalizer: NormalizerKind::Lemma,
        }
    }
}

impl FeatureConfig {
    /// Build the analysis pipeline described by this configuration.
    pub fn pipeline(&self) -> Result<PipelineAnalyzer> {
        if self.min_word_length == 0 {
            return Err(BayespamError::invalid_argument(
                "min_word_length must be at least 1",
            ));
        }

        Ok(PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(MinLengthFilter::new(self.min_word_length)))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(LemmaFilter::with_lemmatizer(
                self.normalizer.lemmatizer(),
            )))
            .add_filter(self.strategy.ngram_filter())
            .with_name(self.strategy.label()))
    }

    /// Build a shareable feature extractor.
    pub fn build(&self) -> Result<Arc<dyn FeatureExtractor>> {
        Ok(Arc::new(self.pipeline()?))
    }
}
