//! Labels and classification results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Label implied by a corpus subdirectory name
    ///
    /// A directory named `spam` in any letter case holds spam. Every other
    /// directory holds ham, whether or not it is literally named `ham`.
    pub fn from_dir_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("spam") {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score of one tested document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// File name of the document
    pub file_name: String,
    /// Estimated probability that the document is spam
    pub spam_probability: f64,
    /// Label of the directory the document came from
    pub actual_class: Label,
}

impl ClassificationResult {
    pub fn new(file_name: impl Into<String>, spam_probability: f64, actual_class: Label) -> Self {
        Self {
            file_name: file_name.into(),
            spam_probability,
            actual_class,
        }
    }

    /// Predicted label: spam when the probability reaches the threshold
    pub fn predicted_label(&self, threshold: f64) -> Label {
        if self.spam_probability >= threshold {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_dir_name() {
        assert_eq!(Label::from_dir_name("spam"), Label::Spam);
        assert_eq!(Label::from_dir_name("SPAM"), Label::Spam);
        assert_eq!(Label::from_dir_name("Spam"), Label::Spam);
        assert_eq!(Label::from_dir_name("ham"), Label::Ham);
        assert_eq!(Label::from_dir_name("ham2"), Label::Ham);
        assert_eq!(Label::from_dir_name("spam_archive"), Label::Ham);
    }

    #[test]
    fn test_predicted_label_threshold_inclusive() {
        let at = ClassificationResult::new("a.txt", 0.5, Label::Ham);
        let below = ClassificationResult::new("b.txt", 0.4999, Label::Ham);
        assert_eq!(at.predicted_label(0.5), Label::Spam);
        assert_eq!(below.predicted_label(0.5), Label::Ham);
    }

    #[test]
    fn test_result_json_shape() {
        let result = ClassificationResult::new("00001.txt", 0.75, Label::Spam);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fileName"], "00001.txt");
        assert_eq!(json["spamProbability"], 0.75);
        assert_eq!(json["actualClass"], "spam");
    }
}
