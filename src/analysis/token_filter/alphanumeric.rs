//! Alphanumeric filter implementation.

use super::Filter;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A filter that removes every non-alphanumeric character from tokens.
///
/// Alphanumeric is the Unicode notion (`char::is_alphanumeric`), so accented
/// letters and non-Latin scripts survive. A token made only of punctuation
/// becomes empty and is kept as the empty token.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if token.text.chars().all(char::is_alphanumeric) {
                    token
                } else {
                    let stripped: String =
                        token.text.chars().filter(|c| c.is_alphanumeric()).collect();
                    token.with_text(stripped)
                }
            })
            .collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_filter() {
        let filter = AlphanumericFilter::new();
        let tokens = vec![
            Token::new("$$$cash$$$", 0),
            Token::new("e-mail", 1),
            Token::new("100%", 2),
            Token::new("café", 3),
            Token::new("...", 4),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 5);
        assert_eq!(result[0].text, "cash");
        assert_eq!(result[1].text, "email");
        assert_eq!(result[2].text, "100");
        assert_eq!(result[3].text, "café");
        assert_eq!(result[4].text, "");
        assert_eq!(result[4].position, 4);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphanumericFilter::new().name(), "alphanumeric");
    }
}
