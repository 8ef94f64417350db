//! Minimal Gemini REST client shared by the reference generator and the embedding comparator.
//!
//! Only the two endpoints the grader needs are modelled: `generateContent` and `embedContent`.
//! Endpoint, model names and the API key come from [`util::config`].

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use util::config;

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    pub fn from_config() -> Self {
        Self {
            base_url: config::gemini_base_url(),
            api_key: config::gemini_api_key(),
            timeout: Duration::from_secs(config::request_timeout_secs()),
        }
    }

    /// `{base}/models/{model}:{method}`
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    /// Starts a POST to `model:method`. The key travels in the `x-goog-api-key` header so it
    /// never appears in a URL, and therefore never in a transport error.
    pub fn post(&self, client: &Client, model: &str, method: &str) -> RequestBuilder {
        client
            .post(self.endpoint(model, method))
            .header("x-goog-api-key", &self.api_key)
    }

    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }
}

/// Request body for `generateContent`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Request body for `embedContent`.
#[derive(Serialize)]
pub struct EmbedRequest {
    pub model: String,
    pub content: Content,
}

#[derive(Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub candidate_count: u32,
    /// Set to 0 to disable thinking for faster requests.
    pub thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Response from `generateContent`.
#[derive(Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<ContentResponse>,
}

#[derive(Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
pub struct PartResponse {
    #[serde(default)]
    pub text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, with all of its parts concatenated.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.parts.iter().map(|p| p.text.as_str()).collect())
    }
}

/// Response from `embedContent`.
#[derive(Deserialize)]
pub struct EmbedResponse {
    pub embedding: Embedding,
}

#[derive(Deserialize)]
pub struct Embedding {
    pub values: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base: &str) -> GeminiSettings {
        GeminiSettings {
            base_url: base.to_string(),
            api_key: "k".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let url = settings("http://localhost:8080/v1beta/").endpoint("m", "embedContent");
        assert_eq!(url, "http://localhost:8080/v1beta/models/m:embedContent");
    }

    #[test]
    fn api_key_goes_in_header_not_url() {
        let settings = settings("http://localhost:8080/v1beta");
        let request = settings
            .post(&Client::new(), "m", "generateContent")
            .build()
            .unwrap();
        assert!(!request.url().as_str().contains("key"));
        assert_eq!(request.headers()["x-goog-api-key"], "k");
    }

    #[test]
    fn generate_request_uses_camel_case() {
        let body = GenerateRequest {
            contents: vec![Content::text("q")],
            generation_config: Some(GenerationConfig {
                max_output_tokens: 100,
                candidate_count: 1,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 100);
        assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "q");
    }

    #[test]
    fn first_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"The cell "},{"text":"divides."}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("The cell divides."));
    }

    #[test]
    fn first_text_is_none_without_candidates() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(resp.first_text().is_none());
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.first_text().is_none());
    }

    #[test]
    fn embed_response_parses_values() {
        let resp: EmbedResponse =
            serde_json::from_str(r#"{"embedding":{"values":[0.1,0.2,0.3]}}"#).unwrap();
        assert_eq!(resp.embedding.values.len(), 3);
    }
}
