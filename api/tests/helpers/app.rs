use api::{app, state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use marker::error::MarkerError;
use marker::traits::reference_provider::ReferenceProvider;
use marker::traits::similarity_scorer::SimilarityScorer;
use marker::utilities::ignore_words::IgnoreSet;
use serde_json::Value;
use std::sync::Arc;

/// Deterministic reference generator: a fixed answer or a fixed failure.
pub enum StubGenerator {
    Answer(&'static str),
    Fail,
}

#[async_trait]
impl ReferenceProvider for StubGenerator {
    async fn generate_reference(&self, _question: &str) -> Result<String, MarkerError> {
        match self {
            StubGenerator::Answer(text) => Ok(text.to_string()),
            StubGenerator::Fail => Err(MarkerError::Generation("stub generator offline".into())),
        }
    }
}

/// Deterministic similarity scorer: a fixed score or a fixed failure.
pub enum StubScorer {
    Score(f64),
    Fail,
}

#[async_trait]
impl SimilarityScorer for StubScorer {
    async fn similarity(&self, _reference: &str, _student: &str) -> Result<f64, MarkerError> {
        match self {
            StubScorer::Score(score) => Ok(*score),
            StubScorer::Fail => Err(MarkerError::Similarity("stub scorer offline".into())),
        }
    }
}

pub fn make_test_app(generator: StubGenerator, scorer: StubScorer) -> Router {
    let state = AppState::new(
        IgnoreSet::from_words(["is", "the", "of", "a"]),
        Arc::new(generator),
        Arc::new(scorer),
    );
    app(state)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
