//! Analyzers combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Features
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use bayespam::analysis::analyzer::Analyzer;
//! use bayespam::analysis::token::TokenStream;
//! use bayespam::error::Result;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "nothing"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;
