//! Error types for the bayespam library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`BayespamError`] enum. The classifier errors (`EmptyDataset`,
//! `ModelNotTrained`, `AlreadyTrained`, `MalformedInput`) are caller contract
//! violations: they are returned immediately and never turned into a default
//! label.
//!
//! # Examples
//!
//! ```
//! use bayespam::error::{BayespamError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayespamError::invalid_argument("ratio must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for bayespam operations.
#[derive(Error, Debug)]
pub enum BayespamError {
    /// Training was invoked with zero documents; priors would be undefined.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Classification was invoked before the model was trained.
    #[error("Model not trained: train the classifier before classifying")]
    ModelNotTrained,

    /// Training was invoked on a model that already holds counts and priors.
    #[error("Model already trained: call reset() before training again")]
    AlreadyTrained,

    /// Input that cannot be treated as text.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (corpus files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with BayespamError.
pub type Result<T> = std::result::Result<T, BayespamError>;

impl BayespamError {
    /// Create a new empty dataset error.
    pub fn empty_dataset<S: Into<String>>(msg: S) -> Self {
        BayespamError::EmptyDataset(msg.into())
    }

    /// Create a new malformed input error.
    pub fn malformed_input<S: Into<String>>(msg: S) -> Self {
        BayespamError::MalformedInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BayespamError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BayespamError::InvalidArgument(msg.into())
    }
}
