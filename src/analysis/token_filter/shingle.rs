//! Word n-gram (shingle) filter implementation.
//!
//! Appends n-grams of adjacent words after the unigrams of the stream.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::token_filter::Filter;
//! use bayespam::analysis::token_filter::shingle::ShingleFilter;
//! use bayespam::analysis::token::Token;
//!
//! let filter = ShingleFilter::bigram();
//! let tokens = vec![
//!     Token::new("buy", 0),
//!     Token::new("cheap", 1),
//!     Token::new("pill", 2),
//!     Token::new("now", 3),
//! ];
//! let texts: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["buy", "cheap", "pill", "now", "buy cheap", "cheap pill"]);
//! ```

use super::Filter;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{BayespamError, Result};

/// A filter that keeps the incoming tokens and appends word n-grams.
///
/// For `n` incoming tokens exactly `n - size` shingles are produced (none when
/// `n <= size`): the window starting at the last possible index is never
/// emitted. Bigrams of `a b c d` are therefore `a b` and `b c`.
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    size: usize,
}

impl ShingleFilter {
    /// Create a new shingle filter joining `size` adjacent words.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(BayespamError::analysis(format!(
                "shingle size must be at least 2, got {size}"
            )));
        }
        Ok(ShingleFilter { size })
    }

    /// Create a word bigram filter.
    pub fn bigram() -> Self {
        ShingleFilter { size: 2 }
    }

    /// Create a word trigram filter.
    pub fn trigram() -> Self {
        ShingleFilter { size: 3 }
    }

    /// Get the number of words per shingle.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<Token> = tokens.collect();
        let shingle_count = words.len().saturating_sub(self.size);

        let shingles: Vec<Token> = (0..shingle_count)
            .map(|start| {
                let text = words[start..start + self.size]
                    .iter()
                    .map(|token| token.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                Token::new(text, words[start].position).with_kind(TokenKind::WordNgram)
            })
            .collect();

        Ok(Box::new(words.into_iter().chain(shingles)))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
