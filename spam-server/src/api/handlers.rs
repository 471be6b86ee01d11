//! API request handlers
//!
//! All handlers read the report computed at startup; nothing here
//! retrains or rescores.

use axum::{extract::State, Json};
use serde::Serialize;
use spam_detector::{ClassificationResult, EvaluationReport};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub report: EvaluationReport,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub documents_tested: usize,
}

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        documents_tested: state.report.results.len(),
    })
}

/// Per-file classification results
pub async fn list_results(State(state): State<Arc<AppState>>) -> Json<Vec<ClassificationResult>> {
    Json(state.report.results.clone())
}

/// Accuracy over the testing set
pub async fn get_accuracy(State(state): State<Arc<AppState>>) -> Json<f64> {
    Json(state.report.accuracy)
}

/// Precision over the testing set
pub async fn get_precision(State(state): State<Arc<AppState>>) -> Json<f64> {
    Json(state.report.precision)
}
