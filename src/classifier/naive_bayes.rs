//! The Naive Bayes classifier.

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureExtractor;
use crate::classifier::config::{ClassifierConfig, ScoringMode};
use crate::document::{Document, Label};
use crate::error::{BayespamError, Result};
use crate::model::{FrequencyModel, ModelStats};
use crate::training::Trainer;

/// Scores of both classes for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
    /// Spam score.
    pub spam: f64,
    /// Ham score.
    pub ham: f64,
    /// How the scores were accumulated.
    pub mode: ScoringMode,
}

impl ClassScores {
    /// The winning label. Ties, including two underflowed products, go to ham.
    pub fn label(&self) -> Label {
        if self.spam > self.ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Get the score of a label.
    pub fn of(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.spam,
            Label::Ham => self.ham,
        }
    }
}

/// Binary spam/ham classifier over a [`FrequencyModel`].
///
/// Training mutates the model exactly once; afterwards every query takes
/// `&self` and can run concurrently.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    trainer: Trainer,
    model: FrequencyModel,
    scoring: ScoringMode,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier from a configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let extractor = config.features.build()?;
        Ok(Self::with_extractor(extractor, config))
    }

    /// Create an untrained classifier around a custom feature extractor.
    ///
    /// `config.features` is ignored; scoring and pruning are taken from it.
    pub fn with_extractor(extractor: Arc<dyn FeatureExtractor>, config: &ClassifierConfig) -> Self {
        let mut trainer = Trainer::new(extractor);
        if let Some(pruning) = &config.pruning {
            trainer = trainer.with_pruning(pruning.clone());
        }

        NaiveBayesClassifier {
            trainer,
            model: FrequencyModel::new(),
            scoring: config.scoring,
        }
    }

    /// Get the feature extractor shared by training and classification.
    pub fn extractor(&self) -> &Arc<dyn FeatureExtractor> {
        self.trainer.extractor()
    }

    /// Get the scoring mode.
    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    /// Get the underlying frequency model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Summarize the underlying model.
    pub fn stats(&self) -> ModelStats {
        self.model.stats()
    }

    /// Check whether the classifier has been trained.
    pub fn is_trained(&self) -> bool {
        self.model.is_trained()
    }

    /// Train on a labeled dataset.
    pub fn train(&mut self, dataset: &[Document]) -> Result<()> {
        self.trainer.train(&mut self.model, dataset)
    }

    /// Train on a labeled dataset counted in `shards` parallel slices.
    pub fn train_parallel(&mut self, dataset: &[Document], shards: usize) -> Result<()> {
        self.trainer.train_parallel(&mut self.model, dataset, shards)
    }

    /// Discard everything learned so the classifier can be trained again.
    pub fn reset(&mut self) {
        debug!("Resetting classifier model");
        self.model.reset();
    }

    /// Score `text` against both classes.
    pub fn scores(&self, text: &str) -> Result<ClassScores> {
        let priors = self.model.priors().ok_or(BayespamError::ModelNotTrained)?;
        let features = self.extractor().extract(text)?;

        let score = |label: Label| -> f64 {
            let probabilities = features
                .iter()
                .map(|feature| self.model.conditional_probability(feature, label));
            match self.scoring {
                ScoringMode::LogSpace => {
                    priors.of(label).ln() + probabilities.map(f64::ln).sum::<f64>()
                }
                ScoringMode::Product => priors.of(label) * probabilities.product::<f64>(),
            }
        };

        let scores = ClassScores {
            spam: score(Label::Spam),
            ham: score(Label::Ham),
            mode: self.scoring,
        };
        trace!(
            "Scored {} features: spam = {}, ham = {}",
            features.len(),
            scores.spam,
            scores.ham
        );
        Ok(scores)
    }

    /// Classify `text` as spam or ham.
    pub fn classify(&self, text: &str) -> Result<Label> {
        Ok(self.scores(text)?.label())
    }

    /// Classify raw bytes, which must be valid UTF-8.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<Label> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            BayespamError::malformed_input(format!("document is not valid UTF-8: {e}"))
        })?;
        self.classify(text)
    }

    /// Classify many texts in parallel. Results keep the input order.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Result<Vec<Label>>
    where
        S: AsRef<str> + Sync,
    {
        if !self.is_trained() {
            return Err(BayespamError::ModelNotTrained);
        }
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}
