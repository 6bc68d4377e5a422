//! Command line argument parsing for the bayespam CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// bayespam - Naive Bayes spam filter
#[derive(Parser, Debug, Clone)]
#[command(name = "bayespam")]
#[command(about = "Train and evaluate a Naive Bayes spam/ham classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BayespamArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "BAYESPAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BayespamArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split a corpus, train on one part and report accuracy on both
    Evaluate(EvaluateArgs),

    /// Train on a whole corpus and classify texts
    Classify(ClassifyArgs),

    /// Train on a whole corpus and show model statistics
    Stats(StatsArgs),
}

/// Location of a labeled corpus
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory of ham files, one document per line
    #[arg(long, value_name = "HAM_DIR")]
    pub ham: PathBuf,

    /// Directory of spam files, one document per line
    #[arg(long, value_name = "SPAM_DIR")]
    pub spam: PathBuf,

    /// Count training documents in this many parallel shards
    #[arg(long, value_name = "SHARDS")]
    pub shards: Option<usize>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Fraction of the corpus used for training
    #[arg(long, default_value = "0.8")]
    pub ratio: f64,

    /// Seed of the shuffle and of the random baseline
    #[arg(long, default_value = "1")]
    pub seed: u64,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Texts to classify (read from stdin, one per line, when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Include per-class scores
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
