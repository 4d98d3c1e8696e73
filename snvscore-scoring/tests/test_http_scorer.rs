//! Tests for the HTTP model adapter against an in-process fake model server.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use snvscore_core::errors::ScoringError;
use snvscore_scoring::{HttpScorer, SequenceScorer, score_one};

fn sequences(body: &Value) -> Vec<String> {
    body["sequences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect()
}

async fn score(Json(body): Json<Value>) -> Json<Value> {
    let scores: Vec<f64> = sequences(&body)
        .iter()
        .map(|s| -(s.len() as f64) / 10.0)
        .collect();
    Json(json!({ "scores": scores }))
}

async fn short(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "scores": [] }))
}

async fn unavailable() -> (StatusCode, Json<Value>) {
    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"detail": "warming up"})))
}

fn spawn_fake_model() -> (tokio::runtime::Runtime, String) {
    let app = Router::new()
        .route("/score", post(score))
        .route("/short", post(short))
        .route("/unavailable", post(unavailable));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to build runtime");
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    rt.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (rt, format!("http://{}", addr))
}

#[test]
fn test_scores_in_order() {
    let (_rt, url) = spawn_fake_model();
    let mut scorer = HttpScorer::new(&format!("{}/score", url), None);

    let scores = scorer
        .score_sequences(&["ACGT".to_string(), "AC".to_string(), "ACGTACGTAC".to_string()])
        .unwrap();
    assert_eq!(scores, vec![-0.4, -0.2, -1.0]);
}

#[test]
fn test_score_one_over_http() {
    let (_rt, url) = spawn_fake_model();
    let mut scorer = HttpScorer::new(&format!("{}/score", url), None);

    assert_eq!(score_one(&mut scorer, "ACGTA").unwrap(), -0.5);
}

#[test]
fn test_count_mismatch() {
    let (_rt, url) = spawn_fake_model();
    let mut scorer = HttpScorer::new(&format!("{}/short", url), None);

    assert!(matches!(
        scorer.score_sequences(&["ACGT".to_string()]),
        Err(ScoringError::CountMismatch { expected: 1, got: 0 })
    ));
}

#[test]
fn test_error_status() {
    let (_rt, url) = spawn_fake_model();
    let mut scorer = HttpScorer::new(&format!("{}/unavailable", url), None);

    match scorer.score_sequences(&["ACGT".to_string()]) {
        Err(ScoringError::Model(msg)) => assert!(msg.contains("503")),
        other => panic!("expected model error, got {:?}", other),
    }
}
