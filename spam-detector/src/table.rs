//! Per-class word frequency tables

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Document-presence counts for one class
///
/// Each recorded document adds at most 1 to a word, however often the
/// word repeats inside it, so `get(word) <= documents()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u32>,
    documents: u32,
}

impl WordFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document given its distinct words
    pub fn record_document<I, S>(&mut self, unique_words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.documents += 1;
        for word in unique_words {
            *self.counts.entry(word.into()).or_insert(0) += 1;
        }
    }

    /// Number of documents containing `word` (0 if never seen)
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of documents recorded
    pub fn documents(&self) -> u32 {
        self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}
