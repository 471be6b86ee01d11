//! spam-detector: Naive Bayes spam classifier
//!
//! Trains per-class word presence tables from a directory of labeled
//! `.txt` documents and scores held-out documents with a Laplace-smoothed
//! log-odds estimator.
//!
//! # Data layout
//!
//! ```text
//! data/
//!   training/
//!     spam/*.txt
//!     ham/*.txt
//!   testing/
//!     spam/*.txt
//!     ham/*.txt
//! ```
//!
//! Any class directory not named `spam` (case-insensitively) is ham.
//!
//! # Example
//!
//! ```no_run
//! use spam_detector::{EvaluationReport, SpamDetector};
//! use std::path::Path;
//!
//! let mut detector = SpamDetector::new();
//! let results = detector.train_and_test(Path::new("data"));
//! let report = EvaluationReport::from_results(results, detector.threshold());
//! println!("accuracy={} precision={}", report.accuracy, report.precision);
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`]: Word extraction
//! - [`table`]: Per-class frequency tables
//! - [`corpus`]: Labeled directory enumeration
//! - [`detector`]: Training and scoring engine
//! - [`metrics`]: Accuracy and precision

pub mod corpus;
pub mod detector;
pub mod error;
pub mod metrics;
pub mod table;
pub mod tokenizer;
pub mod types;

// Re-export commonly used types
pub use detector::{SpamDetector, TrainingSummary, DEFAULT_THRESHOLD};
pub use error::{DetectorError, Result};
pub use metrics::{ConfusionMatrix, EvaluationReport};
pub use table::WordFrequencyTable;
pub use tokenizer::{tokenize, Tokenizer};
pub use types::{ClassificationResult, Label};
