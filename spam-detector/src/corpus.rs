//! Labeled corpus enumeration
//!
//! A corpus root holds one subdirectory per class; each subdirectory holds
//! `.txt` documents. Only immediate subdirectories are visited.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{DetectorError, Result};
use crate::types::Label;

/// Document file extension (matched case-sensitively)
pub const DOCUMENT_SUFFIX: &str = ".txt";

/// A document file together with the label of its directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDocument {
    pub path: PathBuf,
    pub label: Label,
}

impl LabeledDocument {
    /// File name used to identify the document in results
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Read the full document as UTF-8
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| DetectorError::io(&self.path, e))
    }
}

/// List every labeled document under a corpus root
///
/// Subdirectories and files are visited in name order. A subdirectory
/// that cannot be listed is logged and skipped.
pub fn labeled_documents(root: &Path) -> Result<Vec<LabeledDocument>> {
    if !root.is_dir() {
        return Err(DetectorError::MissingDirectory(root.to_path_buf()));
    }

    let mut documents = Vec::new();

    for class_dir in sorted_entries(root)? {
        if !class_dir.is_dir() {
            continue;
        }

        let dir_name = class_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let label = Label::from_dir_name(&dir_name);

        let entries = match sorted_entries(&class_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping directory {}: {}", class_dir.display(), e);
                continue;
            }
        };

        let before = documents.len();
        for path in entries {
            if !is_document(&path) {
                continue;
            }
            if !path.is_file() {
                debug!("Ignoring non-file entry {}", path.display());
                continue;
            }
            documents.push(LabeledDocument { path, label });
        }

        debug!(
            "Found {} {} documents in {}",
            documents.len() - before,
            label,
            class_dir.display()
        );
    }

    Ok(documents)
}

fn is_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(DOCUMENT_SUFFIX))
        .unwrap_or(false)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DetectorError::io(dir, e))? {
        let entry = entry.map_err(|e| DetectorError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
