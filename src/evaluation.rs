//! Accuracy reporting over train/test partitions.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::classifier::NaiveBayesClassifier;
use crate::document::{Document, Label};
use crate::error::{BayespamError, Result};

/// Accuracies measured by [`evaluate`], each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub train_documents: usize,
    pub test_documents: usize,
    /// Classifier accuracy on the documents it was trained on.
    pub train_accuracy: f64,
    /// Accuracy of uniform random guessing on the test partition.
    pub random_accuracy: f64,
    /// Classifier accuracy on the held-out test partition.
    pub test_accuracy: f64,
}

fn ratio(correct: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(BayespamError::empty_dataset(
            "cannot measure accuracy on an empty partition",
        ));
    }
    Ok(correct as f64 / total as f64)
}

/// Fraction of `documents` the trained classifier labels correctly.
pub fn accuracy(classifier: &NaiveBayesClassifier, documents: &[Document]) -> Result<f64> {
    let bodies: Vec<&str> = documents.iter().map(|d| d.body.as_str()).collect();
    let predictions = classifier.classify_batch(&bodies)?;
    let correct = predictions
        .iter()
        .zip(documents)
        .filter(|(predicted, document)| **predicted == document.label)
        .count();
    ratio(correct, documents.len())
}

/// Fraction of `documents` a fair coin labels correctly, seeded for
/// reproducibility.
pub fn random_accuracy(documents: &[Document], seed: u64) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let correct = documents
        .iter()
        .filter(|document| {
            let guess = if rng.random_bool(0.5) {
                Label::Spam
            } else {
                Label::Ham
            };
            guess == document.label
        })
        .count();
    ratio(correct, documents.len())
}

/// Train `classifier` on `train`, then [`measure`] it.
pub fn evaluate(
    classifier: &mut NaiveBayesClassifier,
    train: &[Document],
    test: &[Document],
    seed: u64,
) -> Result<EvaluationReport> {
    if test.is_empty() {
        return Err(BayespamError::empty_dataset(
            "evaluation requires at least one test document",
        ));
    }
    classifier.train(train)?;
    measure(classifier, train, test, seed)
}

/// Measure an already trained classifier on both partitions next to a random
/// baseline on `test`.
pub fn measure(
    classifier: &NaiveBayesClassifier,
    train: &[Document],
    test: &[Document],
    seed: u64,
) -> Result<EvaluationReport> {
    let report = EvaluationReport {
        train_documents: train.len(),
        test_documents: test.len(),
        train_accuracy: accuracy(classifier, train)?,
        random_accuracy: random_accuracy(test, seed)?,
        test_accuracy: accuracy(classifier, test)?,
    };
    info!(
        "Accuracy: train {:.3}, random {:.3}, test {:.3}",
        report.train_accuracy, report.random_accuracy, report.test_accuracy
    );
    Ok(report)
}
