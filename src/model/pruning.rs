//! Opt-in pruning of tokens by relative frequency.
//!
//! For each class independently, a token's relative frequency is its count
//! divided by the number of distinct tokens of that class, as a percentage
//! rounded to three decimals. Tokens at or below `low_threshold_percent`, and
//! tokens inside the `[band_low_percent, band_high_percent]` band, are
//! removed.
//!
//! Pruning is never applied unless a [`PruningConfig`] is supplied. It slows
//! training down and has been observed to raise the error rate on real
//! corpora.

use log::info;
use serde::{Deserialize, Serialize};

use crate::document::Label;
use crate::error::{BayespamError, Result};
use crate::model::frequency::FrequencyModel;

/// Thresholds of the pruning pass, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruningConfig {
    /// Tokens whose relative frequency is at or below this are removed.
    pub low_threshold_percent: f64,
    /// Lower bound of the removed middle band (inclusive).
    pub band_low_percent: f64,
    /// Upper bound of the removed middle band (inclusive).
    pub band_high_percent: f64,
}

impl Default for PruningConfig {
    fn default() -> Self {
        Self {
            low_threshold_percent: 5.0,
            band_low_percent: 40.0,
            band_high_percent: 60.0,
        }
    }
}

impl PruningConfig {
    /// Check that the thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.low_threshold_percent,
            self.band_low_percent,
            self.band_high_percent,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(BayespamError::invalid_argument(
                "pruning thresholds must be finite, non-negative percentages",
            ));
        }
        if self.band_low_percent > self.band_high_percent {
            return Err(BayespamError::invalid_argument(format!(
                "pruning band is inverted: {} > {}",
                self.band_low_percent, self.band_high_percent
            )));
        }
        Ok(())
    }

    fn should_remove(&self, percent: f64) -> bool {
        percent <= self.low_threshold_percent
            || (self.band_low_percent <= percent && percent <= self.band_high_percent)
    }
}

/// Number of distinct tokens removed per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    pub removed_spam: usize,
    pub removed_ham: usize,
}

/// Relative frequency of a token in percent, rounded to three decimals.
fn relative_frequency(count: u64, distinct: usize) -> f64 {
    let percent = count as f64 / distinct as f64 * 100.0;
    (percent * 1000.0).round() / 1000.0
}

/// Remove tokens from both class tables according to `config`.
pub fn prune(model: &mut FrequencyModel, config: &PruningConfig) -> Result<PruneReport> {
    config.validate()?;

    let mut report = PruneReport::default();
    for label in Label::ALL {
        let distinct = model.vocabulary_size(label);
        if distinct == 0 {
            continue;
        }

        let removed = model.retain_tokens(label, |_, count| {
            !config.should_remove(relative_frequency(count, distinct))
        });
        match label {
            Label::Spam => report.removed_spam = removed,
            Label::Ham => report.removed_ham = removed,
        }
    }

    info!(
        "Pruned {} spam and {} ham tokens",
        report.removed_spam, report.removed_ham
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_from_counts(spam: &[(&str, u64)], ham: &[(&str, u64)]) -> FrequencyModel {
        let mut model = FrequencyModel::new();
        for (token, count) in spam {
            for _ in 0..*count {
                model.record(token, Label::Spam);
            }
        }
        for (token, count) in ham {
            for _ in 0..*count {
                model.record(token, Label::Ham);
            }
        }
        model
    }

    #[test]
    fn test_relative_frequency_rounding() {
        assert_eq!(relative_frequency(1, 3), 33.333);
        assert_eq!(relative_frequency(2, 3), 66.667);
        assert_eq!(relative_frequency(1, 20), 5.0);
    }

    #[test]
    fn test_prune_removes_low_and_middle_band() {
        // 4 distinct spam tokens: 1 -> 25%, 2 -> 50%, 3 -> 75%, 10 -> 250%.
        let mut model = model_from_counts(
            &[("rare", 1), ("middle", 2), ("common", 3), ("cash", 10)],
            &[],
        );

        let report = prune(&mut model, &PruningConfig::default()).unwrap();

        assert_eq!(report.removed_spam, 1);
        assert_eq!(report.removed_ham, 0);
        assert_eq!(model.count("middle", Label::Spam), 0);
        assert_eq!(model.count("rare", Label::Spam), 1);
        assert_eq!(model.count("cash", Label::Spam), 10);
        assert_eq!(model.total(Label::Spam), 14);
    }

    #[test]
    fn test_prune_removes_tokens_at_or_below_low_threshold() {
        // 20 distinct ham tokens seen once each: every one is exactly 5%.
        let ham: Vec<(String, u64)> = (0..20).map(|i| (format!("word{i}"), 1)).collect();
        let ham_refs: Vec<(&str, u64)> = ham.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let mut model = model_from_counts(&[], &ham_refs);

        let report = prune(&mut model, &PruningConfig::default()).unwrap();

        assert_eq!(report.removed_ham, 20);
        assert_eq!(model.vocabulary_size(Label::Ham), 0);
        assert_eq!(model.total(Label::Ham), 0);
    }

    #[test]
    fn test_classes_are_pruned_independently() {
        // Spam has 2 distinct tokens (1 -> 50%), ham has 1 (1 -> 100%).
        let mut model = model_from_counts(&[("cash", 1), ("prize", 3)], &[("cash", 1)]);

        let report = prune(&mut model, &PruningConfig::default()).unwrap();

        assert_eq!(report.removed_spam, 1);
        assert_eq!(report.removed_ham, 0);
        assert_eq!(model.count("cash", Label::Spam), 0);
        assert_eq!(model.count("cash", Label::Ham), 1);
    }

    #[test]
    fn test_invalid_config() {
        let mut model = FrequencyModel::new();
        let inverted = PruningConfig {
            band_low_percent: 70.0,
            band_high_percent: 30.0,
            ..PruningConfig::default()
        };
        assert!(prune(&mut model, &inverted).is_err());

        let negative = PruningConfig {
            low_threshold_percent: -1.0,
            ..PruningConfig::default()
        };
        assert!(negative.validate().is_err());
        assert!(PruningConfig::default().validate().is_ok());
    }
}
