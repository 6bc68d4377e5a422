//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! The tokenizer runs first, then the filters in the order they were added.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::analyzer::Analyzer;
//! use bayespam::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use bayespam::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use bayespam::analysis::token_filter::alphanumeric::AlphanumericFilter;
//! use bayespam::analysis::token_filter::min_length::MinLengthFilter;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(MinLengthFilter::new(3)))
//!     .add_filter(Arc::new(AlphanumericFilter::new()))
//!     .with_name("words");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hi, win a FREE prize!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "Hi");
//! assert_eq!(tokens[1].text, "win");
//! assert_eq!(tokens[2].text, "FREE");
//! assert_eq!(tokens[3].text, "prize");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
