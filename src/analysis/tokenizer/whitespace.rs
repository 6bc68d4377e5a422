//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on runs of Unicode whitespace.
///
/// Punctuation stays attached to the words; stripping it is the job of
/// [`AlphanumericFilter`](crate::analysis::token_filter::alphanumeric::AlphanumericFilter).
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
