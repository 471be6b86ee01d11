//! API Server - HTTP server for evaluation results

use axum::{routing::get, Router};
use spam_detector::{EvaluationReport, SpamDetector};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::{Result, ServerError};

/// Train on `data_root/training`, score `data_root/testing` and summarize
///
/// Blocking; run it off the async runtime.
pub fn evaluate(data_root: &Path) -> EvaluationReport {
    info!("Training and testing the model from {}", data_root.display());

    let mut detector = SpamDetector::new();
    let results = detector.train_and_test(data_root);
    let report = EvaluationReport::from_results(results, detector.threshold());

    info!(
        "Model training and testing completed: {} documents, accuracy {:.4}, precision {:.4}",
        report.results.len(),
        report.accuracy,
        report.precision
    );

    report
}

/// Run [`evaluate`] on the blocking thread pool
pub async fn evaluate_blocking(data_root: PathBuf) -> Result<EvaluationReport> {
    tokio::task::spawn_blocking(move || evaluate(&data_root))
        .await
        .map_err(|e| ServerError::Evaluation(e.to_string()))
}

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: SocketAddr,
}

impl ApiServer {
    /// Create a new API server serving a computed report
    pub fn new(report: EvaluationReport, addr: SocketAddr) -> Self {
        Self {
            state: Arc::new(AppState { report }),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let spam_routes = Router::new()
            .route("/spam", get(handlers::list_results))
            .route("/spam/accuracy", get(handlers::get_accuracy))
            .route("/spam/precision", get(handlers::get_precision));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", spam_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
