//! Vertex AI `generateContent` client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::GenerativeModel;
use crate::TripPlannerError;
use crate::config::ModelConfig;

/// Gemini model served through Vertex AI
pub struct VertexModel {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl VertexModel {
    /// Create a new client for the configured project, region and model
    pub fn new(config: &ModelConfig) -> crate::Result<Self> {
        let mut builder = Client::builder().user_agent("TripPlanner/0.1.0");
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout.into()));
        }
        let client = builder.build().map_err(|e| {
            TripPlannerError::config(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            access_token: config.access_token.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for VertexModel {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_json(&self, prompt: &str) -> crate::Result<String> {
        let start_time = Instant::now();
        debug!("Calling model endpoint {}", self.endpoint);

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Model request failed: {}", e);
            TripPlannerError::api(format!("Model request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Model API returned {}: {}", status, error_text);
            return Err(TripPlannerError::api(format!(
                "Model API error {status}: {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            TripPlannerError::parse(format!("Failed to parse model response: {e}"))
        })?;

        let text = parsed
            .into_text()
            .ok_or_else(|| TripPlannerError::parse("Model response contained no text"))?;

        info!(
            "Model answered with {} bytes in {:.3}s",
            text.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(text)
    }
}
