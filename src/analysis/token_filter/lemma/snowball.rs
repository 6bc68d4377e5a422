//! Snowball (Porter2) stemmer exposed as a lemmatizer.

use rust_stemmers::{Algorithm, Stemmer};

use crate::analysis::token_filter::lemma::Lemmatizer;

/// Lemmatizer backed by the English Snowball stemmer.
///
/// Stems are not dictionary words ("company" becomes "compani"), but they
/// collapse verb and adjective inflections that noun lemmatization keeps
/// apart.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl std::fmt::Debug for SnowballLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballLemmatizer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl SnowballLemmatizer {
    /// Create a new English Snowball lemmatizer.
    pub fn new() -> Self {
        SnowballLemmatizer {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowball_lemmatizer() {
        let lemmatizer = SnowballLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("pills"), "pill");
        assert_eq!(lemmatizer.lemmatize("offers"), "offer");
    }

    #[test]
    fn test_lemmatizer_name() {
        assert_eq!(SnowballLemmatizer::new().name(), "snowball");
    }
}
