//! Gemini HTTP client for judgment analysis.
//!
//! Uses the generateContent API with a JSON response schema so the model
//! replies with the `Analysis` wire shape directly.

use async_trait::async_trait;
use massima_core::analysis::Analysis;
use massima_core::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::prompt;

/// Default Gemini API URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy credential variable, read as a fallback.
const API_KEY_FALLBACK_ENV: &str = "API_KEY";

/// Optional model override.
const MODEL_ENV: &str = "GEMINI_MODEL";

/// The one seam to the hosted model: a judgment text in, a validated
/// analysis or a single failure out. Substitutable in tests.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult<Analysis>;
}

/// Gemini analysis client.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client with an explicit endpoint, model and credential.
    pub fn new(base_url: &str, model: &str, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
        }
    }

    /// Create a client from process configuration. A missing credential is
    /// logged but does not prevent construction; the call then fails at
    /// invocation time.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_FALLBACK_ENV))
            .unwrap_or_default();
        if api_key.is_empty() {
            warn!(
                "{} is not set; analysis calls will be rejected by the API",
                API_KEY_ENV
            );
        }

        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(DEFAULT_GEMINI_URL, &model, api_key)
    }
}

#[async_trait]
impl Analyzer for GeminiClient {
    async fn analyze(&self, text: &str) -> AnalysisResult<Analysis> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt::build_prompt(text),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: prompt::response_schema(),
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Transport(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let payload = first_text(decoded)?;
        debug!(bytes = payload.len(), "received analysis payload");

        decode_analysis(&payload)
    }
}

/// Pull the first non-empty text part out of the reply.
fn first_text(response: GenerateResponse) -> AnalysisResult<String> {
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(AnalysisError::EmptyResponse)
}

/// Decode the model's text payload into an `Analysis`, or fail. Never
/// yields a partially populated object.
fn decode_analysis(payload: &str) -> AnalysisResult<Analysis> {
    Ok(serde_json::from_str(payload)?)
}
