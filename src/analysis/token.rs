//! Token types for the feature extraction pipeline.
//!
//! A [`Token`] is the unit that flows from the tokenizer through the filter
//! chain. Its text is the feature that ends up in the frequency tables.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("offer", 0);
//! assert_eq!(token.text, "offer");
//! assert_eq!(token.kind, TokenKind::Word);
//!
//! let shingle = Token::new("free offer", 5).with_kind(TokenKind::WordNgram);
//! assert_eq!(shingle.kind, TokenKind::WordNgram);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// How the token was produced
    pub kind: TokenKind,
}

/// Classification of tokens by the stage that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A single word (unigram)
    Word,
    /// Adjacent words joined with a single space (bigram, trigram)
    WordNgram,
    /// Adjacent characters of the space-stripped word sequence
    CharNgram,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            kind: TokenKind::Word,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the kind of this token.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
