//! Corpus statistics of a trained classifier.
//!
//! The [`FrequencyModel`] is created empty, filled by the
//! [`Trainer`](crate::training::Trainer) in a single pass, and read-only for
//! the classifier afterwards. [`pruning`] provides the opt-in post-training
//! pass that removes tokens by relative frequency.

pub mod frequency;
pub mod pruning;

pub use frequency::{FrequencyModel, ModelStats, Priors};
pub use pruning::{PruneReport, PruningConfig, prune};
