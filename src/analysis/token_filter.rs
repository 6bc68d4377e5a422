//! Token filter implementations for token transformation.
//!
//! Filters transform the token stream produced by a tokenizer. The
//! classification pipeline chains them in this order:
//!
//! ```text
//! Whitespace → MinLength(3) → Alphanumeric → Lemma → Shingle(2)
//! ```
//!
//! # Available Filters
//!
//! - [`min_length::MinLengthFilter`] - Drops raw words shorter than a minimum
//! - [`alphanumeric::AlphanumericFilter`] - Strips non-alphanumeric characters
//! - [`lemma::LemmaFilter`] - Reduces words to their base form
//! - [`shingle::ShingleFilter`] - Appends word n-grams (bigrams, trigrams)
//! - [`char_ngram::CharNgramFilter`] - Appends character n-grams
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::token_filter::Filter;
//! use bayespam::analysis::token_filter::alphanumeric::AlphanumericFilter;
//! use bayespam::analysis::token::Token;
//!
//! let filter = AlphanumericFilter::new();
//! let tokens = vec![Token::new("Hello,", 0), Token::new("world!", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "Hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing them
/// to modify, drop, or append tokens.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use bayespam::analysis::token::{Token, TokenStream};
/// use bayespam::analysis::token_filter::Filter;
/// use bayespam::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod char_ngram;
pub mod lemma;
pub mod min_length;
pub mod shingle;
