//! Training of the frequency model from labeled documents.
//!
//! The trainer extracts the features of every document with the shared
//! [`FeatureExtractor`], counts them per class, and sets the class priors once
//! the whole dataset has been seen. Counting happens in a scratch model that
//! only replaces the target once every document has been processed, so a
//! failed run leaves the target untouched.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::features::FeatureConfig;
//! use bayespam::document::{Document, Label};
//! use bayespam::model::FrequencyModel;
//! use bayespam::training::Trainer;
//!
//! let trainer = Trainer::new(FeatureConfig::default().build().unwrap());
//! let mut model = FrequencyModel::new();
//!
//! trainer
//!     .train(
//!         &mut model,
//!         &[Document::spam("cheap pills"), Document::ham("team lunch")],
//!     )
//!     .unwrap();
//!
//! assert_eq!(model.count("pill", Label::Spam), 1);
//! assert_eq!(model.priors().unwrap().spam, 0.5);
//! ```

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::features::FeatureExtractor;
use crate::document::Document;
use crate::error::{BayespamError, Result};
use crate::model::{FrequencyModel, PruningConfig, prune};

/// Builds a [`FrequencyModel`] from a training dataset.
#[derive(Clone)]
pub struct Trainer {
    extractor: Arc<dyn FeatureExtractor>,
    pruning: Option<PruningConfig>,
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("extractor", &self.extractor.name())
            .field("pruning", &self.pruning)
            .finish()
    }
}

/// Counts gathered from a slice of the dataset.
struct PartialCounts {
    model: FrequencyModel,
    spam_documents: usize,
}

impl Trainer {
    /// Create a trainer using the given feature extractor.
    pub fn new(extractor: Arc<dyn FeatureExtractor>) -> Self {
        Trainer {
            extractor,
            pruning: None,
        }
    }

    /// Enable the post-training pruning pass.
    pub fn with_pruning(mut self, config: PruningConfig) -> Self {
        self.pruning = Some(config);
        self
    }

    /// Get the feature extractor used by this trainer.
    pub fn extractor(&self) -> &Arc<dyn FeatureExtractor> {
        &self.extractor
    }

    /// Train `model` on `dataset` in a single sequential pass.
    ///
    /// Fails with `EmptyDataset` when `dataset` is empty and with
    /// `AlreadyTrained` when `model` has been trained before; call
    /// [`FrequencyModel::reset`] to train it again.
    pub fn train(&self, model: &mut FrequencyModel, dataset: &[Document]) -> Result<()> {
        self.check_preconditions(model, dataset)?;
        debug!(
            "Training on {} documents with '{}'",
            dataset.len(),
            self.extractor.name()
        );

        let counts = self.count(dataset)?;
        self.finish(model, counts.model, counts.spam_documents, dataset.len())
    }

    /// Train `model` on `dataset` split into `shards` contiguous slices counted
    /// in parallel.
    ///
    /// Shard models are merged additively in shard order before the priors are
    /// computed, so the result is identical to [`Trainer::train`].
    pub fn train_parallel(
        &self,
        model: &mut FrequencyModel,
        dataset: &[Document],
        shards: usize,
    ) -> Result<()> {
        if shards == 0 {
            return Err(BayespamError::invalid_argument(
                "shard count must be at least 1",
            ));
        }
        self.check_preconditions(model, dataset)?;

        let chunk_size = dataset.len().div_ceil(shards);
        debug!(
            "Training on {} documents in {} shards of up to {} documents",
            dataset.len(),
            dataset.len().div_ceil(chunk_size),
            chunk_size
        );

        let partials = dataset
            .par_chunks(chunk_size)
            .map(|chunk| self.count(chunk))
            .collect::<Result<Vec<_>>>()?;

        let mut merged = FrequencyModel::new();
        let mut spam_documents = 0;
        for partial in partials {
            merged.merge(partial.model)?;
            spam_documents += partial.spam_documents;
        }

        self.finish(model, merged, spam_documents, dataset.len())
    }

    fn check_preconditions(&self, model: &FrequencyModel, dataset: &[Document]) -> Result<()> {
        if dataset.is_empty() {
            return Err(BayespamError::empty_dataset(
                "training requires at least one document",
            ));
        }
        if model.is_trained() {
            return Err(BayespamError::AlreadyTrained);
        }
        Ok(())
    }

    fn count(&self, documents: &[Document]) -> Result<PartialCounts> {
        let mut model = FrequencyModel::new();
        let mut spam_documents = 0;

        for document in documents {
            if document.is_spam() {
                spam_documents += 1;
            }
            for feature in self.extractor.extract(&document.body)? {
                model.record(&feature, document.label);
            }
        }

        Ok(PartialCounts {
            model,
            spam_documents,
        })
    }

    fn finish(
        &self,
        target: &mut FrequencyModel,
        mut counts: FrequencyModel,
        spam_documents: usize,
        documents: usize,
    ) -> Result<()> {
        counts.set_priors(spam_documents, documents)?;

        if let Some(config) = &self.pruning {
            prune(&mut counts, config)?;
        }

        let stats = counts.stats();
        info!(
            "Trained on {} documents ({} spam): {} spam tokens / {} distinct, {} ham tokens / {} distinct, P(spam) = {:.4}",
            stats.documents,
            stats.spam_documents,
            stats.spam_tokens,
            stats.spam_vocabulary,
            stats.ham_tokens,
            stats.ham_vocabulary,
            stats.prior_spam.unwrap_or_default()
        );

        *target = counts;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::FeatureConfig;
    use crate::document::Label;

    fn trainer() -> Trainer {
        Trainer::new(FeatureConfig::default().build().unwrap())
    }

    fn dataset() -> Vec<Document> {
        vec![
            Document::spam("buy cheap pills now"),
            Document::ham("meeting schedule tomorrow"),
            Document::spam("cheap watches for sale"),
            Document::ham("notes from the meeting"),
            Document::ham("lunch tomorrow?"),
        ]
    }

    #[test]
    fn test_train_counts_features_per_class() {
        let mut model = FrequencyModel::new();
        trainer()
            .train(&mut model, &[Document::spam("buy cheap pills now")])
            .unwrap();

        // 4 unigrams + 2 bigrams.
        assert_eq!(model.total(Label::Spam), 6);
        assert_eq!(model.total(Label::Ham), 0);
        assert_eq!(model.count("pill", Label::Spam), 1);
        assert_eq!(model.count("cheap pill", Label::Spam), 1);
        assert_eq!(model.count("pill now", Label::Spam), 0);
    }

    #[test]
    fn test_priors_sum_to_one() {
        let mut model = FrequencyModel::new();
        trainer().train(&mut model, &dataset()).unwrap();

        let priors = model.priors().unwrap();
        assert_eq!(priors.spam, 2.0 / 5.0);
        assert_eq!(priors.ham, 3.0 / 5.0);
        assert!((priors.spam + priors.ham - 1.0).abs() < 1e-12);
        assert_eq!(priors.documents, 5);
    }

    #[test]
    fn test_totals_match_counts() {
        let mut model = FrequencyModel::new();
        trainer().train(&mut model, &dataset()).unwrap();

        for label in Label::ALL {
            let sum: u64 = model.counts(label).values().sum();
            assert_eq!(model.total(label), sum);
        }
    }

    #[test]
    fn test_empty_dataset_fails() {
        let mut model = FrequencyModel::new();
        let result = trainer().train(&mut model, &[]);

        assert!(matches!(result, Err(BayespamError::EmptyDataset(_))));
        assert!(!model.is_trained());
    }

    #[test]
    fn test_training_twice_fails_until_reset() {
        let trainer = trainer();
        let mut model = FrequencyModel::new();
        trainer.train(&mut model, &dataset()).unwrap();
        let trained = model.clone();

        let result = trainer.train(&mut model, &dataset());
        assert!(matches!(result, Err(BayespamError::AlreadyTrained)));
        assert_eq!(model, trained, "failed re-training must not touch the model");

        model.reset();
        trainer.train(&mut model, &dataset()).unwrap();
        assert_eq!(model, trained);
    }

    #[test]
    fn test_parallel_training_matches_sequential() {
        let trainer = trainer();
        let mut sequential = FrequencyModel::new();
        trainer.train(&mut sequential, &dataset()).unwrap();

        for shards in [1, 2, 3, 8] {
            let mut parallel = FrequencyModel::new();
            trainer
                .train_parallel(&mut parallel, &dataset(), shards)
                .unwrap();
            assert_eq!(parallel, sequential, "shards = {shards}");
        }
    }

    #[test]
    fn test_parallel_training_rejects_zero_shards() {
        let mut model = FrequencyModel::new();
        assert!(trainer().train_parallel(&mut model, &dataset(), 0).is_err());
        assert!(matches!(
            trainer().train_parallel(&mut model, &[], 2),
            Err(BayespamError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_pruning_runs_after_training() {
        // 25 distinct words and 23 bigrams, each seen once: about 2% apiece.
        let long_ham = (0..25)
            .map(|i| format!("term{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let docs = vec![Document::spam("cheap pills"), Document::ham(long_ham)];

        let mut pruned = FrequencyModel::new();
        trainer()
            .with_pruning(PruningConfig::default())
            .train(&mut pruned, &docs)
            .unwrap();
        let mut plain = FrequencyModel::new();
        trainer().train(&mut plain, &docs).unwrap();

        assert_eq!(plain.vocabulary_size(Label::Ham), 48);
        assert_eq!(pruned.vocabulary_size(Label::Ham), 0);
        assert_eq!(pruned.total(Label::Ham), 0);
        assert!(pruned.is_trained());
        assert_eq!(pruned.priors(), plain.priors());
    }
}
