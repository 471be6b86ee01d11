//! Evaluation metrics over classification results
//!
//! The predicted label is derived from each probability with the `>=`
//! rule. A ratio whose denominator is zero (no results, or nothing
//! predicted spam) is reported as `0.0` rather than NaN.

use serde::Serialize;

use crate::types::{ClassificationResult, Label};

/// Confusion matrix with spam as the positive class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
    pub true_positives: u32,
    pub false_positives: u32,
    pub true_negatives: u32,
    pub false_negatives: u32,
}

impl ConfusionMatrix {
    /// Count outcomes of results under a decision threshold
    pub fn from_results(results: &[ClassificationResult], threshold: f64) -> Self {
        let mut matrix = Self::default();
        for result in results {
            let predicted = result.predicted_label(threshold);
            match (result.actual_class, predicted) {
                (Label::Spam, Label::Spam) => matrix.true_positives += 1,
                (Label::Ham, Label::Spam) => matrix.false_positives += 1,
                (Label::Ham, Label::Ham) => matrix.true_negatives += 1,
                (Label::Spam, Label::Ham) => matrix.false_negatives += 1,
            }
        }
        matrix
    }

    /// Number of results counted
    pub fn total(&self) -> u32 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// (TP + TN) / total
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Results of one test pass with their summary metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub results: Vec<ClassificationResult>,
    pub accuracy: f64,
    pub precision: f64,
    pub confusion: ConfusionMatrix,
}

impl EvaluationReport {
    /// Summarize results under a decision threshold
    pub fn from_results(results: Vec<ClassificationResult>, threshold: f64) -> Self {
        let confusion = ConfusionMatrix::from_results(&results, threshold);
        Self {
            accuracy: confusion.accuracy(),
            precision: confusion.precision(),
            confusion,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(rows: &[(Label, f64)]) -> Vec<ClassificationResult> {
        rows.iter()
            .enumerate()
            .map(|(i, &(label, p))| ClassificationResult::new(format!("{}.txt", i), p, label))
            .collect()
    }

    #[test]
    fn test_one_of_each_outcome() {
        let results = results(&[
            (Label::Spam, 0.9),
            (Label::Spam, 0.3),
            (Label::Ham, 0.2),
            (Label::Ham, 0.6),
        ]);
        let report = EvaluationReport::from_results(results, 0.5);

        assert_eq!(
            report.confusion,
            ConfusionMatrix {
                true_positives: 1,
                false_positives: 1,
                true_negatives: 1,
                false_negatives: 1,
            }
        );
        assert_eq!(report.accuracy, 0.5);
        assert_eq!(report.precision, 0.5);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let matrix = ConfusionMatrix::from_results(&results(&[(Label::Spam, 0.5)]), 0.5);
        assert_eq!(matrix.true_positives, 1);
    }

    #[test]
    fn test_empty_results_are_zero() {
        let report = EvaluationReport::from_results(Vec::new(), 0.5);
        assert_eq!(report.confusion.total(), 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.precision, 0.0);
    }

    #[test]
    fn test_no_positive_predictions() {
        let matrix = ConfusionMatrix::from_results(
            &results(&[(Label::Ham, 0.1), (Label::Spam, 0.2)]),
            0.5,
        );
        assert_eq!(matrix.accuracy(), 0.5);
        assert_eq!(matrix.precision(), 0.0);
    }
}
