//! Integration tests for the HTTP API

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use spam_server::{evaluate, evaluate_blocking, ApiServer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn setup_data_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "training/spam/s1.txt", "free money now");
    write(root, "training/spam/s2.txt", "claim your free prize now");
    write(root, "training/ham/h1.txt", "meeting notes today");
    write(root, "training/ham/h2.txt", "lunch meeting tomorrow");
    write(root, "testing/spam/t1.txt", "free free money");
    write(root, "testing/ham/t2.txt", "notes from the meeting today");
    temp_dir
}

fn router_for(root: &Path) -> Router {
    let report = evaluate(root);
    ApiServer::new(report, "127.0.0.1:0".parse().unwrap()).router()
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_results() {
    let temp_dir = setup_data_dir();
    let (status, json) = get_json(router_for(temp_dir.path()), "/api/spam").await;

    assert_eq!(status, StatusCode::OK);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);

    let spam = results
        .iter()
        .find(|r| r["fileName"] == "t1.txt")
        .unwrap();
    assert_eq!(spam["actualClass"], "spam");
    assert!(spam["spamProbability"].as_f64().unwrap() > 0.5);

    let ham = results
        .iter()
        .find(|r| r["fileName"] == "t2.txt")
        .unwrap();
    assert_eq!(ham["actualClass"], "ham");
    assert!(ham["spamProbability"].as_f64().unwrap() < 0.5);
}

#[tokio::test]
async fn test_accuracy_and_precision() {
    let temp_dir = setup_data_dir();
    let router = router_for(temp_dir.path());

    let (status, accuracy) = get_json(router.clone(), "/api/spam/accuracy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(accuracy.as_f64(), Some(1.0));

    let (status, precision) = get_json(router, "/api/spam/precision").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(precision.as_f64(), Some(1.0));
}

#[tokio::test]
async fn test_missing_data_serves_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_for(&temp_dir.path().join("absent"));

    let (_, results) = get_json(router.clone(), "/api/spam").await;
    assert_eq!(results, serde_json::json!([]));

    let (_, accuracy) = get_json(router, "/api/spam/accuracy").await;
    assert_eq!(accuracy.as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_health() {
    let temp_dir = setup_data_dir();
    let (status, json) = get_json(router_for(temp_dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["documents_tested"], 2);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let temp_dir = setup_data_dir();
    let response = router_for(temp_dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/spam")
                .header("Origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_evaluate_blocking() {
    let temp_dir = setup_data_dir();
    let report = evaluate_blocking(temp_dir.path().to_path_buf()).await.unwrap();
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.confusion.total(), 2);
}
