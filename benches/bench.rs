//! Criterion benchmarks for bayespam.
//!
//! Covers the three hot paths:
//! - Feature extraction
//! - Training (sequential and sharded)
//! - Classification (single and batch)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use bayespam::analysis::features::{FeatureConfig, FeatureExtractor, FeatureStrategy};
use bayespam::classifier::{ClassifierConfig, NaiveBayesClassifier, ScoringMode};
use bayespam::document::{Document, Label};
use bayespam::model::FrequencyModel;
use bayespam::training::Trainer;

const SPAM_WORDS: &[&str] = &[
    "free", "cheap", "pills", "winner", "prize", "offer", "click", "viagra", "cash", "bonus",
    "limited", "discount", "credit", "loans", "casino", "guaranteed",
];

const HAM_WORDS: &[&str] = &[
    "meeting", "schedule", "tomorrow", "project", "report", "attached", "review", "lunch",
    "agenda", "minutes", "deadline", "budget", "team", "draft", "notes", "thanks",
];

/// Generate labeled documents with a pseudo-random word distribution.
fn generate_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let label = Label::ALL[i % 2];
            let words = match label {
                Label::Spam => SPAM_WORDS,
                Label::Ham => HAM_WORDS,
            };
            let length = 20 + (i % 60);
            let body = (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ");
            Document::new(body, label)
        })
        .collect()
}

fn trained_classifier(scoring: ScoringMode) -> NaiveBayesClassifier {
    let config = ClassifierConfig {
        scoring,
        ..ClassifierConfig::default()
    };
    let mut classifier = NaiveBayesClassifier::new(&config).unwrap();
    classifier.train(&generate_documents(2000)).unwrap();
    classifier
}

/// Benchmark feature extraction per strategy.
fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");
    let documents = generate_documents(100);

    for strategy in [
        FeatureStrategy::UnigramBigram,
        FeatureStrategy::UnigramTrigram,
        FeatureStrategy::UnigramCharBigram,
    ] {
        let extractor = FeatureConfig {
            strategy,
            ..FeatureConfig::default()
        }
        .build()
        .unwrap();

        group.throughput(Throughput::Elements(documents.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(extractor.name()), |b| {
            b.iter(|| {
                for document in &documents {
                    black_box(extractor.extract(black_box(&document.body)).unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark sequential and sharded training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    let documents = generate_documents(2000);
    let trainer = Trainer::new(FeatureConfig::default().build().unwrap());
    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter_with_setup(FrequencyModel::new, |mut model| {
            trainer.train(&mut model, black_box(&documents)).unwrap();
            black_box(model)
        })
    });

    for shards in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("parallel", shards), &shards, |b, &shards| {
            b.iter_with_setup(FrequencyModel::new, |mut model| {
                trainer
                    .train_parallel(&mut model, black_box(&documents), shards)
                    .unwrap();
                black_box(model)
            })
        });
    }

    group.finish();
}

/// Benchmark classification of single texts and batches.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let texts: Vec<String> = generate_documents(500)
        .into_iter()
        .map(|document| document.body)
        .collect();

    for scoring in [ScoringMode::LogSpace, ScoringMode::Product] {
        let classifier = trained_classifier(scoring);
        group.bench_function(format!("single_{scoring:?}"), |b| {
            b.iter(|| black_box(classifier.classify(black_box(&texts[0])).unwrap()))
        });
    }

    let classifier = trained_classifier(ScoringMode::LogSpace);
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("batch", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&texts)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_feature_extraction,
    bench_training,
    bench_classification
);

criterion_main!(benches);
