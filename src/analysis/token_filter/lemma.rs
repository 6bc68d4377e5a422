//! Lemmatizing token filter and lemmatizer implementations.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::error::Result;

/// Trait for algorithms that reduce a word to its base form.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its base form. Unknown words come back unchanged.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod english;
pub mod identity;
pub mod snowball;

pub use english::EnglishLemmatizer;
pub use identity::IdentityLemmatizer;
pub use snowball::SnowballLemmatizer;

/// Filter that replaces every token with its lemma.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the English noun lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Arc::new(EnglishLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Get the lemmatizer used by this filter.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
