//! Labeled documents.
//!
//! A [`Document`] is one email body together with its [`Label`]. Documents
//! are immutable once read and are only borrowed by the trainer and the
//! evaluation helpers.
//!
//! # Examples
//!
//! ```
//! use bayespam::document::{Document, Label};
//!
//! let doc = Document::spam("WIN a free cruise!!!");
//! assert_eq!(doc.label, Label::Spam);
//! assert!(doc.is_spam());
//!
//! let label: Label = "ham".parse().unwrap();
//! assert_eq!(label, Label::Ham);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BayespamError;

/// The two classes a document can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unsolicited bulk email.
    Spam,
    /// Legitimate email.
    Ham,
}

impl Label {
    /// Both labels, spam first.
    pub const ALL: [Label; 2] = [Label::Spam, Label::Ham];

    /// Get the lowercase name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = BayespamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spam" => Ok(Label::Spam),
            "ham" => Ok(Label::Ham),
            other => Err(BayespamError::invalid_argument(format!(
                "unknown label '{other}', expected 'spam' or 'ham'"
            ))),
        }
    }
}

/// A document body and its class label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The text of the document.
    pub body: String,
    /// The class the document belongs to.
    pub label: Label,
}

impl Document {
    /// Create a new labeled document.
    pub fn new<S: Into<String>>(body: S, label: Label) -> Self {
        Document {
            body: body.into(),
            label,
        }
    }

    /// Create a spam document.
    pub fn spam<S: Into<String>>(body: S) -> Self {
        Self::new(body, Label::Spam)
    }

    /// Create a ham document.
    pub fn ham<S: Into<String>>(body: S) -> Self {
        Self::new(body, Label::Ham)
    }

    /// Check whether the document is labeled spam.
    pub fn is_spam(&self) -> bool {
        self.label == Label::Spam
    }
}
