//! A comparator that scores semantic similarity by embedding both answers and taking the cosine of
//! the two vectors.
//!
//! The `EmbeddingComparator` calls Gemini's `embedContent` endpoint once per answer. Both calls run
//! concurrently. Any failure is a [`MarkerError::Similarity`]; no fallback score is produced.

use crate::comparators::cosine::cosine_similarity;
use crate::error::MarkerError;
use crate::traits::similarity_scorer::SimilarityScorer;
use crate::utilities::gemini::{Content, EmbedRequest, EmbedResponse, GeminiSettings};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};
use util::config;

/// Similarity scorer backed by a Gemini embedding model.
pub struct EmbeddingComparator {
    client: Client,
    settings: GeminiSettings,
    model: String,
}

impl EmbeddingComparator {
    pub fn new(settings: GeminiSettings, model: impl Into<String>) -> Result<Self, MarkerError> {
        let client = settings
            .build_client()
            .map_err(|e| MarkerError::Similarity(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            settings,
            model: model.into(),
        })
    }

    /// Builds a comparator from the global configuration.
    pub fn from_config() -> Result<Self, MarkerError> {
        Self::new(GeminiSettings::from_config(), config::embedding_model())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, MarkerError> {
        let body = EmbedRequest {
            model: format!("models/{}", self.model),
            content: Content::text(text),
        };

        let response = self
            .settings
            .post(&self.client, &self.model, "embedContent")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Embedding request failed: {}", e);
                MarkerError::Similarity(e.to_string())
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| MarkerError::Similarity(e.without_url().to_string()))?;

        if !status.is_success() {
            error!(%status, "Embedding endpoint returned an error status");
            return Err(MarkerError::Similarity(format!(
                "embedding endpoint returned {status}: {response_text}"
            )));
        }

        let parsed = serde_json::from_str::<EmbedResponse>(&response_text).map_err(|e| {
            MarkerError::Similarity(format!(
                "error decoding response body: {}. Full response: {}",
                e, response_text
            ))
        })?;

        Ok(parsed.embedding.values)
    }
}

#[async_trait]
impl SimilarityScorer for EmbeddingComparator {
    async fn similarity(&self, reference: &str, student: &str) -> Result<f64, MarkerError> {
        let (reference_vec, student_vec) =
            tokio::try_join!(self.embed(reference), self.embed(student))?;
        let score = cosine_similarity(&reference_vec, &student_vec)?;
        debug!(model = %self.model, score, "Computed answer similarity");
        Ok(score)
    }
}
