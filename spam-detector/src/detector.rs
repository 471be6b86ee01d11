//! Naive Bayes training and scoring engine
//!
//! Training builds one document-presence table per class; testing scores
//! each document by the log-likelihood ratio of its words under the two
//! tables, squashed through the logistic function.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::corpus::{labeled_documents, LabeledDocument};
use crate::error::DetectorError;
use crate::table::WordFrequencyTable;
use crate::tokenizer::{self, Tokenizer};
use crate::types::{ClassificationResult, Label};

/// Name of the training subdirectory under a data root
pub const TRAINING_DIR: &str = "training";
/// Name of the testing subdirectory under a data root
pub const TESTING_DIR: &str = "testing";
/// Probability at or above which a document is predicted spam
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Outcome of a training pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    /// Spam documents learned
    pub spam_documents: u32,
    /// Ham documents learned
    pub ham_documents: u32,
    /// Documents that could not be read
    pub skipped: u32,
}

/// Spam detector engine
///
/// Train once, then test any number of times. Scoring only reads the
/// tables, so a trained detector can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SpamDetector {
    spam: WordFrequencyTable,
    ham: WordFrequencyTable,
    threshold: f64,
    tokenizer: Tokenizer,
}

impl SpamDetector {
    /// Create an untrained detector
    pub fn new() -> Self {
        Self {
            spam: WordFrequencyTable::new(),
            ham: WordFrequencyTable::new(),
            threshold: DEFAULT_THRESHOLD,
            tokenizer: tokenizer::shared().clone(),
        }
    }

    /// Train on `root/training`, then score `root/testing`
    ///
    /// A missing root is reported once and yields nothing. A missing phase
    /// directory is reported and that phase yields nothing; the other phase
    /// still runs.
    pub fn train_and_test(&mut self, root: &Path) -> Vec<ClassificationResult> {
        if !root.is_dir() {
            error!("Cannot train or test: {}", DetectorError::MissingDirectory(root.to_path_buf()));
            return Vec::new();
        }

        let training = root.join(TRAINING_DIR);
        let testing = root.join(TESTING_DIR);

        if training.is_dir() {
            self.train(&training);
        } else {
            error!("Training directory not found: {}", training.display());
        }

        if testing.is_dir() {
            self.test(&testing)
        } else {
            error!("Testing directory not found: {}", testing.display());
            Vec::new()
        }
    }

    /// Learn word presence counts from a labeled training corpus
    pub fn train(&mut self, training_root: &Path) -> TrainingSummary {
        let mut summary = TrainingSummary::default();

        let documents = match labeled_documents(training_root) {
            Ok(documents) => documents,
            Err(e) => {
                error!("Cannot train: {}", e);
                return summary;
            }
        };

        for document in &documents {
            match self.learn(document) {
                Ok(Label::Spam) => summary.spam_documents += 1,
                Ok(Label::Ham) => summary.ham_documents += 1,
                Err(e) => {
                    warn!("Skipping training document: {}", e);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Trained on {} spam and {} ham documents ({} spam words, {} ham words, {} skipped)",
            summary.spam_documents,
            summary.ham_documents,
            self.spam.len(),
            self.ham.len(),
            summary.skipped
        );

        summary
    }

    fn learn(&mut self, document: &LabeledDocument) -> crate::Result<Label> {
        let text = document.read()?;
        let words = self.tokenizer.unique_tokens(&text);

        match document.label {
            Label::Spam => self.spam.record_document(words),
            Label::Ham => self.ham.record_document(words),
        }

        Ok(document.label)
    }

    /// Score every document of a labeled testing corpus
    pub fn test(&self, testing_root: &Path) -> Vec<ClassificationResult> {
        let documents = match labeled_documents(testing_root) {
            Ok(documents) => documents,
            Err(e) => {
                error!("Cannot test: {}", e);
                return Vec::new();
            }
        };

        let mut results = Vec::with_capacity(documents.len());
        for document in &documents {
            match document.read() {
                Ok(text) => {
                    let probability = self.classify_text(&text);
                    debug!("{} -> {:.4} ({})", document.path.display(), probability, document.label);
                    results.push(ClassificationResult::new(
                        document.file_name(),
                        probability,
                        document.label,
                    ));
                }
                Err(e) => warn!("Skipping test document: {}", e),
            }
        }

        info!("Scored {} test documents", results.len());
        results
    }

    /// Spam probability of raw text
    pub fn classify_text(&self, text: &str) -> f64 {
        let words = self.tokenizer.tokenize(text);
        self.spam_probability(&words)
    }

    /// Spam probability of a token sequence
    ///
    /// Every occurrence contributes, including repeats and words seen in
    /// neither table. An empty sequence scores exactly 0.5.
    pub fn spam_probability<S: AsRef<str>>(&self, words: &[S]) -> f64 {
        let mut spam_log_sum = 0.0f64;
        let mut ham_log_sum = 0.0f64;

        for word in words {
            let word = word.as_ref();
            spam_log_sum += self.word_spam_probability(word).ln();
            ham_log_sum += self.word_ham_probability(word).ln();
        }

        1.0 / (1.0 + (ham_log_sum - spam_log_sum).exp())
    }

    /// Laplace-smoothed probability of a word under the spam table
    pub fn word_spam_probability(&self, word: &str) -> f64 {
        smoothed(&self.spam, word)
    }

    /// Laplace-smoothed probability of a word under the ham table
    pub fn word_ham_probability(&self, word: &str) -> f64 {
        smoothed(&self.ham, word)
    }

    pub fn spam_table(&self) -> &WordFrequencyTable {
        &self.spam
    }

    pub fn ham_table(&self) -> &WordFrequencyTable {
        &self.ham
    }

    /// Decision threshold consumers apply with `>=`
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for SpamDetector {
    fn default() -> Self {
        Self::new()
    }
}

// Denominator is the vocabulary size of the table, not its document count.
fn smoothed(table: &WordFrequencyTable, word: &str) -> f64 {
    (table.get(word) as f64 + 1.0) / (table.len() as f64 + 2.0)
}
