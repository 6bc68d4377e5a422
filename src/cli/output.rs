//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::ClassScores;
use crate::cli::args::{BayespamArgs, OutputFormat};
use crate::document::Label;
use crate::error::Result;
use crate::evaluation::EvaluationReport;
use crate::model::ModelStats;

/// Result structure for one classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct Classification {
    pub text: String,
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ClassScores>,
}

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub classifications: Vec<Classification>,
    pub spam: usize,
    pub ham: usize,
}

impl ClassificationResults {
    /// Collect classifications and count them per label.
    pub fn new(classifications: Vec<Classification>) -> Self {
        let spam = classifications
            .iter()
            .filter(|c| c.label == Label::Spam)
            .count();
        let ham = classifications.len() - spam;
        ClassificationResults {
            classifications,
            spam,
            ham,
        }
    }
}

/// Output a result in the specified format, using `human` for human output.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &BayespamArgs,
    human: fn(&T),
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            human(result);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &BayespamArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output an evaluation report in human format.
pub fn evaluation_human(report: &EvaluationReport) {
    println!("Evaluation Results:");
    println!("═══════════════════");
    println!(
        "Documents: {} train / {} test",
        report.train_documents, report.test_documents
    );
    println!("Accuracy on train:  {}", format_percent(report.train_accuracy));
    println!("Accuracy of random: {}", format_percent(report.random_accuracy));
    println!("Accuracy on test:   {}", format_percent(report.test_accuracy));
}

/// Output classifications in human format.
pub fn classifications_human(results: &ClassificationResults) {
    for classification in &results.classifications {
        match &classification.scores {
            Some(scores) => println!(
                "{}\t{}\t(spam {:.4}, ham {:.4})",
                classification.label, classification.text, scores.spam, scores.ham
            ),
            None => println!("{}\t{}", classification.label, classification.text),
        }
    }
    if results.classifications.len() > 1 {
        println!();
        println!("Spam: {}  Ham: {}", results.spam, results.ham);
    }
}

/// Output model statistics in human format.
pub fn stats_human(stats: &ModelStats) {
    println!("Model Statistics:");
    println!("═════════════════");
    println!(
        "Documents: {} ({} spam, {} ham)",
        stats.documents,
        stats.spam_documents,
        stats.documents - stats.spam_documents
    );
    println!();
    println!("{:<8}{:>12}{:>12}{:>10}", "Class", "Tokens", "Distinct", "Prior");
    println!("────────────────────────────────────────");
    println!(
        "{:<8}{:>12}{:>12}{:>10}",
        "spam",
        stats.spam_tokens,
        stats.spam_vocabulary,
        format_prior(stats.prior_spam)
    );
    println!(
        "{:<8}{:>12}{:>12}{:>10}",
        "ham",
        stats.ham_tokens,
        stats.ham_vocabulary,
        format_prior(stats.prior_ham)
    );
}

/// Format an accuracy in `[0, 1]` as a percentage with one decimal.
fn format_percent(fraction: f64) -> String {
    format!("{:.1} %", fraction * 100.0)
}

fn format_prior(prior: Option<f64>) -> String {
    prior.map_or_else(|| "-".to_string(), |p| format!("{p:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.9876), "98.8 %");
        assert_eq!(format_percent(1.0), "100.0 %");
        assert_eq!(format_percent(0.0), "0.0 %");
    }

    #[test]
    fn test_format_prior() {
        assert_eq!(format_prior(Some(0.25)), "0.2500");
        assert_eq!(format_prior(None), "-");
    }

    #[test]
    fn test_classification_results_counts() {
        let results = ClassificationResults::new(vec![
            Classification {
                text: "cheap pills".to_string(),
                label: Label::Spam,
                scores: None,
            },
            Classification {
                text: "lunch?".to_string(),
                label: Label::Ham,
                scores: None,
            },
            Classification {
                text: "free cash".to_string(),
                label: Label::Spam,
                scores: None,
            },
        ]);

        assert_eq!(results.spam, 2);
        assert_eq!(results.ham, 1);

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["classifications"][0]["label"], "spam");
        assert!(json["classifications"][0].get("scores").is_none());
    }
}
