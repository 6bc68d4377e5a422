//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the feature extraction pipeline: they
//! split the raw document body into word tokens that the filters then clean,
//! normalize and combine into n-grams.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::tokenizer::Tokenizer;
//! use bayespam::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a pipeline can be shared by the
/// trainer and by parallel classification.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use bayespam::analysis::token::{Token, TokenStream};
/// use bayespam::analysis::tokenizer::Tokenizer;
/// use bayespam::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
