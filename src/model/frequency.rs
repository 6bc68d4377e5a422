//! Per-class token frequency tables with Laplace-smoothed probabilities.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::Label;
use crate::error::{BayespamError, Result};

/// Class priors estimated from the label frequency of the training set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    /// P(spam).
    pub spam: f64,
    /// P(ham).
    pub ham: f64,
    /// Number of training documents.
    pub documents: usize,
    /// Number of training documents labeled spam.
    pub spam_documents: usize,
}

impl Priors {
    /// Get the prior of a label.
    pub fn of(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.spam,
            Label::Ham => self.ham,
        }
    }
}

/// Token occurrence counts for the spam (positive) and ham (negative) class.
///
/// Invariant: the total of a class is the sum of its counts (occurrences, not
/// distinct tokens).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyModel {
    positive_counts: AHashMap<String, u64>,
    negative_counts: AHashMap<String, u64>,
    positive_total: u64,
    negative_total: u64,
    priors: Option<Priors>,
}

impl FrequencyModel {
    /// Create an empty, untrained model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token` in a document of class `label`.
    pub(crate) fn record(&mut self, token: &str, label: Label) {
        let (counts, total) = self.table_mut(label);
        match counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.to_string(), 1);
            }
        }
        *total += 1;
    }

    /// Add the counts of another model into this one.
    ///
    /// Used to combine shards of a parallel training run before the priors are
    /// computed, so neither side may be trained yet.
    pub(crate) fn merge(&mut self, other: FrequencyModel) -> Result<()> {
        if self.is_trained() || other.is_trained() {
            return Err(BayespamError::AlreadyTrained);
        }

        for (token, count) in other.positive_counts {
            *self.positive_counts.entry(token).or_insert(0) += count;
        }
        for (token, count) in other.negative_counts {
            *self.negative_counts.entry(token).or_insert(0) += count;
        }
        self.positive_total += other.positive_total;
        self.negative_total += other.negative_total;

        Ok(())
    }

    /// Set the priors from the document counts of a completed training pass.
    pub(crate) fn set_priors(&mut self, spam_documents: usize, documents: usize) -> Result<()> {
        if documents == 0 {
            return Err(BayespamError::empty_dataset(
                "cannot compute class priors from zero documents",
            ));
        }
        if spam_documents > documents {
            return Err(BayespamError::invalid_argument(format!(
                "spam documents ({spam_documents}) exceed total documents ({documents})"
            )));
        }

        let total = documents as f64;
        self.priors = Some(Priors {
            spam: spam_documents as f64 / total,
            ham: (documents - spam_documents) as f64 / total,
            documents,
            spam_documents,
        });
        Ok(())
    }

    /// Keep only the tokens of `label` for which `keep` returns true.
    ///
    /// The class total is reduced by the occurrences removed. Returns the
    /// number of distinct tokens removed.
    pub(crate) fn retain_tokens<F>(&mut self, label: Label, mut keep: F) -> usize
    where
        F: FnMut(&str, u64) -> bool,
    {
        let (counts, total) = self.table_mut(label);
        let before = counts.len();
        let mut removed_occurrences = 0;
        counts.retain(|token, count| {
            let kept = keep(token, *count);
            if !kept {
                removed_occurrences += *count;
            }
            kept
        });
        *total -= removed_occurrences;
        before - counts.len()
    }

    /// Drop all counts and priors, returning the model to its untrained state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether training has completed.
    pub fn is_trained(&self) -> bool {
        self.priors.is_some()
    }

    /// Get the priors, if the model is trained.
    pub fn priors(&self) -> Option<Priors> {
        self.priors
    }

    /// Get the prior of a label, failing on an untrained model.
    pub fn prior(&self, label: Label) -> Result<f64> {
        self.priors
            .map(|priors| priors.of(label))
            .ok_or(BayespamError::ModelNotTrained)
    }

    /// Get the number of occurrences of `token` in class `label`.
    pub fn count(&self, token: &str, label: Label) -> u64 {
        self.counts(label).get(token).copied().unwrap_or(0)
    }

    /// Get the token counts of a class.
    pub fn counts(&self, label: Label) -> &AHashMap<String, u64> {
        match label {
            Label::Spam => &self.positive_counts,
            Label::Ham => &self.negative_counts,
        }
    }

    /// Get the total number of token occurrences recorded for a class.
    pub fn total(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.positive_total,
            Label::Ham => self.negative_total,
        }
    }

    /// Get the number of distinct tokens seen in a class.
    pub fn vocabulary_size(&self, label: Label) -> usize {
        self.counts(label).len()
    }

    /// P(token | label) with add-one smoothing.
    ///
    /// The denominator is the class total plus the combined total of both
    /// classes:
    ///
    /// ```text
    /// (count(token, label) + 1) / (total(label) + total(spam) + total(ham))
    /// ```
    ///
    /// Unseen tokens get `1 / denominator`, never zero. A model without any
    /// recorded occurrence has no evidence either way and yields `1.0`.
    pub fn conditional_probability(&self, token: &str, label: Label) -> f64 {
        let denominator = self.total(label) + self.positive_total + self.negative_total;
        if denominator == 0 {
            return 1.0;
        }
        (self.count(token, label) + 1) as f64 / denominator as f64
    }

    /// Summarize the model.
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            documents: self.priors.map_or(0, |p| p.documents),
            spam_documents: self.priors.map_or(0, |p| p.spam_documents),
            spam_tokens: self.positive_total,
            ham_tokens: self.negative_total,
            spam_vocabulary: self.positive_counts.len(),
            ham_vocabulary: self.negative_counts.len(),
            prior_spam: self.priors.map(|p| p.spam),
            prior_ham: self.priors.map(|p| p.ham),
        }
    }

    fn table_mut(&mut self, label: Label) -> (&mut AHashMap<String, u64>, &mut u64) {
        match label {
            Label::Spam => (&mut self.positive_counts, &mut self.positive_total),
            Label::Ham => (&mut self.negative_counts, &mut self.negative_total),
        }
    }
}

/// Summary statistics of a frequency model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub documents: usize,
    pub spam_documents: usize,
    pub spam_tokens: u64,
    pub ham_tokens: u64,
    pub spam_vocabulary: usize,
    pub ham_vocabulary: usize,
    pub prior_spam: Option<f64>,
    pub prior_ham: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(spam: &[&str], ham: &[&str]) -> FrequencyModel {
        let mut model = FrequencyModel::new();
        for token in spam {
            model.record(token, Label::Spam);
        }
        for token in ham {
            model.record(token, Label::Ham);
        }
        model
    }

    fn assert_totals_match_counts(model: &FrequencyModel) {
        for label in Label::ALL {
            let sum: u64 = model.counts(label).values().sum();
            assert_eq!(model.total(label), sum, "{label} total out of sync");
        }
    }

    #[test]
    fn test_record_updates_counts_and_totals() {
        let model = model_with(&["cash", "cash", "prize"], &["lunch"]);

        assert_eq!(model.count("cash", Label::Spam), 2);
        assert_eq!(model.count("cash", Label::Ham), 0);
        assert_eq!(model.total(Label::Spam), 3);
        assert_eq!(model.total(Label::Ham), 1);
        assert_eq!(model.vocabulary_size(Label::Spam), 2);
        assert_totals_match_counts(&model);
    }

    #[test]
    fn test_conditional_probability_uses_combined_denominator() {
        let model = model_with(&["cash", "cash", "prize"], &["lunch"]);

        // spam: (2 + 1) / (3 + 3 + 1)
        assert!((model.conditional_probability("cash", Label::Spam) - 3.0 / 7.0).abs() < 1e-12);
        // ham: (0 + 1) / (1 + 3 + 1)
        assert!((model.conditional_probability("cash", Label::Ham) - 1.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_tokens_are_never_zero() {
        let model = model_with(&["cash"], &["lunch", "meeting"]);

        for label in Label::ALL {
            let p = model.conditional_probability("never-seen", label);
            assert!(p > 0.0 && p <= 1.0);
        }
        assert_eq!(
            FrequencyModel::new().conditional_probability("anything", Label::Spam),
            1.0
        );
    }

    #[test]
    fn test_more_spam_occurrences_raise_spam_probability_only() {
        let mut model = model_with(&["cash", "prize"], &["lunch"]);
        let spam_before = model.conditional_probability("cash", Label::Spam);
        let ham_before = model.conditional_probability("cash", Label::Ham);

        model.record("cash", Label::Spam);

        assert!(model.conditional_probability("cash", Label::Spam) > spam_before);
        // The ham numerator is unchanged; only the shared denominator term grows.
        let ham_after = model.conditional_probability("cash", Label::Ham);
        assert_eq!(model.count("cash", Label::Ham), 0);
        assert!((ham_after - 1.0 / 5.0).abs() < 1e-12);
        assert!((ham_before - 1.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_priors() {
        let mut model = FrequencyModel::new();
        assert!(matches!(
            model.prior(Label::Spam),
            Err(BayespamError::ModelNotTrained)
        ));

        model.set_priors(1, 4).unwrap();

        let priors = model.priors().unwrap();
        assert_eq!(priors.spam, 0.25);
        assert_eq!(priors.ham, 0.75);
        assert_eq!(priors.spam + priors.ham, 1.0);
        assert_eq!(model.prior(Label::Ham).unwrap(), 0.75);
        assert!(model.is_trained());
    }

    #[test]
    fn test_priors_from_zero_documents_fail() {
        let mut model = FrequencyModel::new();
        assert!(matches!(
            model.set_priors(0, 0),
            Err(BayespamError::EmptyDataset(_))
        ));
        assert!(model.set_priors(3, 2).is_err());
        assert!(!model.is_trained());
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left = model_with(&["cash"], &["lunch"]);
        let right = model_with(&["cash", "prize"], &["lunch", "notes"]);

        left.merge(right).unwrap();

        assert_eq!(left.count("cash", Label::Spam), 2);
        assert_eq!(left.count("lunch", Label::Ham), 2);
        assert_eq!(left.total(Label::Spam), 3);
        assert_eq!(left.total(Label::Ham), 3);
        assert_totals_match_counts(&left);
    }

    #[test]
    fn test_merge_into_trained_model_fails() {
        let mut trained = model_with(&["cash"], &[]);
        trained.set_priors(1, 1).unwrap();

        assert!(matches!(
            trained.merge(FrequencyModel::new()),
            Err(BayespamError::AlreadyTrained)
        ));
    }

    #[test]
    fn test_retain_tokens_keeps_invariant() {
        let mut model = model_with(&["cash", "cash", "prize", "win"], &["lunch"]);

        let removed = model.retain_tokens(Label::Spam, |_, count| count > 1);

        assert_eq!(removed, 2);
        assert_eq!(model.total(Label::Spam), 2);
        assert_eq!(model.total(Label::Ham), 1);
        assert_totals_match_counts(&model);
    }

    #[test]
    fn test_reset() {
        let mut model = model_with(&["cash"], &["lunch"]);
        model.set_priors(1, 2).unwrap();

        model.reset();

        assert_eq!(model, FrequencyModel::new());
        assert!(!model.is_trained());
    }

    #[test]
    fn test_stats() {
        let mut model = model_with(&["cash", "cash"], &["lunch"]);
        model.set_priors(1, 2).unwrap();

        let stats = model.stats();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.spam_tokens, 2);
        assert_eq!(stats.spam_vocabulary, 1);
        assert_eq!(stats.prior_spam, Some(0.5));
    }
}
