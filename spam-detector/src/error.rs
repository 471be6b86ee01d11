//! Error types for spam-detector

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Detector error types
///
/// None of these abort a training or testing pass. The engine logs them
/// and moves on to the next directory or file.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// A required root, training or testing directory does not exist
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A directory or document could not be listed, opened or decoded
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DetectorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
