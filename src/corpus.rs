//! Loading labeled corpora from disk and splitting them for evaluation.
//!
//! A corpus directory holds plain text files; every line of every file is one
//! document. Files are visited in file-name order so the same directory always
//! yields the same dataset, and undecodable bytes are replaced rather than
//! rejected.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::document::{Document, Label};
use crate::error::{BayespamError, Result};

/// Parameters of a train/test split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of the dataset that goes to the training partition.
    pub ratio: f64,
    /// Seed of the shuffle.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            ratio: 0.8,
            seed: 1,
        }
    }
}

impl SplitConfig {
    /// Check that the ratio lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(BayespamError::invalid_argument(format!(
                "split ratio must be between 0 and 1, got {}",
                self.ratio
            )));
        }
        Ok(())
    }
}

/// Load every line of every regular file directly under `dir` as a document
/// labeled `label`.
///
/// Files that cannot be read are skipped with a warning; a missing or
/// unreadable directory is an error.
pub fn load_documents<P: AsRef<Path>>(dir: P, label: Label) -> Result<Vec<Document>> {
    let dir = dir.as_ref();

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut documents = Vec::new();
    for path in &files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable file {}: {e}", path.display());
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        documents.extend(text.lines().map(|line| Document::new(line, label)));
    }

    debug!(
        "Loaded {} {label} documents from {} files in {}",
        documents.len(),
        files.len(),
        dir.display()
    );
    Ok(documents)
}

/// Load the ham corpus followed by the spam corpus.
pub fn read_dataset<P: AsRef<Path>, Q: AsRef<Path>>(
    ham_dir: P,
    spam_dir: Q,
) -> Result<Vec<Document>> {
    let mut dataset = load_documents(ham_dir, Label::Ham)?;
    dataset.extend(load_documents(spam_dir, Label::Spam)?);
    Ok(dataset)
}

/// Shuffle `dataset` with a seeded generator and cut it into a training and a
/// test partition at `floor(len * ratio)`.
///
/// The same dataset and configuration always produce the same partitions.
pub fn split_dataset(
    mut dataset: Vec<Document>,
    config: &SplitConfig,
) -> Result<(Vec<Document>, Vec<Document>)> {
    config.validate()?;

    let boundary = (dataset.len() as f64 * config.ratio).floor() as usize;
    let mut rng = StdRng::seed_from_u64(config.seed);
    dataset.shuffle(&mut rng);

    let test = dataset.split_off(boundary.min(dataset.len()));
    debug!(
        "Split dataset into {} training and {} test documents",
        dataset.len(),
        test.len()
    );
    Ok((dataset, test))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| Document::new(format!("message {i}"), Label::ALL[i % 2]))
            .collect()
    }

    #[test]
    fn test_load_documents_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "third\nfourth\n").unwrap();
        fs::write(dir.path().join("a.txt"), "first\nsecond").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let docs = load_documents(dir.path(), Label::Spam).unwrap();

        let bodies: Vec<&str> = docs.iter().map(|d| d.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "third", "fourth"]);
        assert!(docs.iter().all(|d| d.label == Label::Spam));
    }

    #[test]
    fn test_load_documents_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mail"), b"caf\xe9 offer\n").unwrap();

        let docs = load_documents(dir.path(), Label::Ham).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].body, "caf\u{FFFD} offer");
    }

    #[test]
    fn test_load_documents_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_documents(dir.path().join("missing"), Label::Ham);
        assert!(matches!(result, Err(BayespamError::Io(_))));
    }

    #[test]
    fn test_read_dataset_puts_ham_first() {
        let ham = tempfile::tempdir().unwrap();
        let spam = tempfile::tempdir().unwrap();
        fs::write(ham.path().join("1"), "see you at lunch").unwrap();
        fs::write(spam.path().join("1"), "cheap pills\nfree money").unwrap();

        let dataset = read_dataset(ham.path(), spam.path()).unwrap();

        let labels: Vec<Label> = dataset.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec![Label::Ham, Label::Spam, Label::Spam]);
    }

    #[test]
    fn test_split_sizes() {
        let (train, test) = split_dataset(numbered(10), &SplitConfig::default()).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);

        let config = SplitConfig {
            ratio: 0.75,
            seed: 7,
        };
        let (train, test) = split_dataset(numbered(7), &config).unwrap();
        assert_eq!(train.len(), 5);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_split_is_deterministic_and_disjoint() {
        let config = SplitConfig::default();
        let first = split_dataset(numbered(50), &config).unwrap();
        let second = split_dataset(numbered(50), &config).unwrap();
        assert_eq!(first, second);

        let (train, test) = first;
        let mut bodies: Vec<String> = train.iter().chain(&test).map(|d| d.body.clone()).collect();
        bodies.sort();
        bodies.dedup();
        assert_eq!(bodies.len(), 50);
    }

    #[test]
    fn test_split_edges() {
        let (train, test) = split_dataset(numbered(3), &SplitConfig { ratio: 1.0, seed: 1 }).unwrap();
        assert_eq!((train.len(), test.len()), (3, 0));

        let (train, test) = split_dataset(numbered(3), &SplitConfig { ratio: 0.0, seed: 1 }).unwrap();
        assert_eq!((train.len(), test.len()), (0, 3));

        let (train, test) = split_dataset(Vec::new(), &SplitConfig::default()).unwrap();
        assert!(train.is_empty() && test.is_empty());

        let invalid = SplitConfig {
            ratio: 1.5,
            seed: 1,
        };
        assert!(matches!(
            split_dataset(numbered(3), &invalid),
            Err(BayespamError::InvalidArgument(_))
        ));
    }
}
