//! Command implementations for the bayespam CLI.

use std::io::{self, BufRead};

use log::{debug, info};

use crate::classifier::{ClassifierConfig, NaiveBayesClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{SplitConfig, read_dataset, split_dataset};
use crate::document::Document;
use crate::error::{BayespamError, Result};
use crate::evaluation::measure;

/// Execute a CLI command.
pub fn execute_command(args: BayespamArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Evaluate(evaluate_args) => run_evaluate(evaluate_args, &config, &args),
        Command::Classify(classify_args) => run_classify(classify_args, &config, &args),
        Command::Stats(stats_args) => run_stats(stats_args, &config, &args),
    }
}

/// Load the classifier configuration, falling back to defaults.
fn load_config(args: &BayespamArgs) -> Result<ClassifierConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ClassifierConfig::from_file(path)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

/// Train a fresh classifier on `dataset`, sharded when requested.
fn train_classifier(
    config: &ClassifierConfig,
    dataset: &[Document],
    shards: Option<usize>,
) -> Result<NaiveBayesClassifier> {
    let mut classifier = NaiveBayesClassifier::new(config)?;
    match shards {
        Some(shards) => classifier.train_parallel(dataset, shards)?,
        None => classifier.train(dataset)?,
    }
    Ok(classifier)
}

/// Split the corpus, train on the first part and report accuracies.
fn run_evaluate(
    args: &EvaluateArgs,
    config: &ClassifierConfig,
    cli_args: &BayespamArgs,
) -> Result<()> {
    let dataset = read_dataset(&args.corpus.ham, &args.corpus.spam)?;
    info!("Read {} documents", dataset.len());

    let split = SplitConfig {
        ratio: args.ratio,
        seed: args.seed,
    };
    let (train, test) = split_dataset(dataset, &split)?;

    let classifier = train_classifier(config, &train, args.corpus.shards)?;
    let report = measure(&classifier, &train, &test, args.seed)?;

    output_result("Evaluation", &report, cli_args, evaluation_human)
}

/// Train on the whole corpus and classify texts from arguments or stdin.
fn run_classify(
    args: &ClassifyArgs,
    config: &ClassifierConfig,
    cli_args: &BayespamArgs,
) -> Result<()> {
    let dataset = read_dataset(&args.corpus.ham, &args.corpus.spam)?;
    let classifier = train_classifier(config, &dataset, args.corpus.shards)?;

    let texts = if args.texts.is_empty() {
        debug!("Reading texts from stdin");
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    } else {
        args.texts.clone()
    };
    if texts.is_empty() {
        return Err(BayespamError::invalid_argument("no text to classify"));
    }

    let mut classifications = Vec::with_capacity(texts.len());
    for text in texts {
        let scores = classifier.scores(&text)?;
        classifications.push(Classification {
            label: scores.label(),
            scores: args.scores.then_some(scores),
            text,
        });
    }

    output_result(
        "Classification",
        &ClassificationResults::new(classifications),
        cli_args,
        classifications_human,
    )
}

/// Train on the whole corpus and show model statistics.
fn run_stats(args: &StatsArgs, config: &ClassifierConfig, cli_args: &BayespamArgs) -> Result<()> {
    let dataset = read_dataset(&args.corpus.ham, &args.corpus.spam)?;
    let classifier = train_classifier(config, &dataset, args.corpus.shards)?;

    output_result("Model statistics", &classifier.stats(), cli_args, stats_human)
}
