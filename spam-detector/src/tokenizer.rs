//! Word tokenizer
//!
//! Splits raw document text into lowercase alphabetic words. Runs of
//! letters and digits (any script) are the candidate tokens; a run is kept
//! only if it is made entirely of ASCII letters, so `abc123` and `café` are
//! discarded whole rather than split. Punctuation, whitespace and `_`
//! separate runs.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const TOKEN_PATTERN: &str = r"[\p{L}\p{M}\p{N}]+";

/// Compiled word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"),
        }
    }

    /// Tokenize text into lowercase words, in order, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| run.bytes().all(|b| b.is_ascii_alphabetic()))
            .map(|word| word.to_ascii_lowercase())
            .collect()
    }

    /// Distinct words of a text
    pub fn unique_tokens(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

/// Tokenize with the shared process-wide tokenizer
pub fn tokenize(text: &str) -> Vec<String> {
    shared().tokenize(text)
}

pub(crate) fn shared() -> &'static Tokenizer {
    static SHARED: OnceLock<Tokenizer> = OnceLock::new();
    SHARED.get_or_init(Tokenizer::new)
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
