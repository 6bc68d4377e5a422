//! Character n-gram filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{BayespamError, Result};

/// A filter that keeps the incoming tokens and appends character n-grams.
///
/// The n-grams are taken over the concatenation of all token texts with
/// spaces removed, so they cross word boundaries. For a concatenation of
/// `len` characters, `len - size` n-grams are produced; like
/// [`ShingleFilter`](super::shingle::ShingleFilter), the last window is not
/// emitted.
#[derive(Clone, Debug)]
pub struct CharNgramFilter {
    size: usize,
}

impl CharNgramFilter {
    /// Create a new filter producing n-grams of `size` characters.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BayespamError::analysis(
                "character n-gram size must be at least 1",
            ));
        }
        Ok(CharNgramFilter { size })
    }

    /// Create a character bigram filter.
    pub fn bigram() -> Self {
        CharNgramFilter { size: 2 }
    }

    /// Create a character trigram filter.
    pub fn trigram() -> Self {
        CharNgramFilter { size: 3 }
    }

    /// Get the number of characters per n-gram.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Filter for CharNgramFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<Token> = tokens.collect();
        let chars: Vec<char> = words
            .iter()
            .flat_map(|token| token.text.chars())
            .filter(|c| *c != ' ')
            .collect();

        let ngrams: Vec<Token> = (0..chars.len().saturating_sub(self.size))
            .map(|start| {
                let text: String = chars[start..start + self.size].iter().collect();
                Token::new(text, start).with_kind(TokenKind::CharNgram)
            })
            .collect();

        Ok(Box::new(words.into_iter().chain(ngrams)))
    }

    fn name(&self) -> &'static str {
        "char_ngram"
    }
}
