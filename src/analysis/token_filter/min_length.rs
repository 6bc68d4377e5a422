//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// Default minimum word length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// A filter that drops tokens shorter than a minimum number of characters.
///
/// The length is measured on the token as it arrives, so when this filter
/// runs before [`AlphanumericFilter`](super::alphanumeric::AlphanumericFilter)
/// punctuation counts towards the length: `"a!!"` is kept, `"hi"` is not.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter with the given minimum length.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let kept: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_length)
            .collect();

        Ok(kept.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
