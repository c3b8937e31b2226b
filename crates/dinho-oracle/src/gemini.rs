//! # Gemini Client
//!
//! [`CompletionClient`] backed by the Gemini `generateContent` REST call.
//!
//! ## Wire Format
//! ```text
//! POST {base_url}/models/{model}:generateContent
//! x-goog-api-key: <key>
//!
//! {
//!   "contents": [{ "role": "user", "parts": [{ "text": "<prompt>" }] }],
//!   "generationConfig": {
//!     "temperature": 0.3,                 ◄── optional
//!     "seed": 841893624,                  ◄── optional
//!     "responseMimeType": "application/json",
//!     "responseSchema": { ... }           ◄── structured requests only
//!   }
//! }
//!
//! 200 OK
//! { "candidates": [{ "content": { "parts": [{ "text": "..." }] } }] }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};

/// Longest error body kept in [`OracleError::Status`].
const MAX_ERROR_BODY: usize = 300;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
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

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
}

impl<'a> From<&'a CompletionRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        let generation_config = if request.seed.is_some()
            || request.temperature.is_some()
            || request.is_structured()
        {
            Some(GenerationConfig {
                temperature: request.temperature,
                seed: request.seed,
                response_mime_type: request
                    .response_schema
                    .as_ref()
                    .map(|_| "application/json"),
                response_schema: request.response_schema.as_ref(),
            })
        } else {
            None
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client for `model` under `base_url`.
    pub fn new(base_url: &str, model: &str, api_key: impl Into<String>) -> OracleResult<Self> {
        let endpoint = Url::parse(&format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        ))?;

        Ok(GeminiClient {
            http: Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// Creates a client from configuration, or fails with
    /// [`OracleError::NotConfigured`] when there is no key.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        let key = config.api_key().ok_or(OracleError::NotConfigured)?;
        Self::new(&config.api.base_url, &config.api.model, key)
    }

    /// The full `generateContent` URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> OracleResult<String> {
        let body = GenerateContentRequest::from(request);
        debug!(
            endpoint = %self.endpoint,
            structured = request.is_structured(),
            seed = ?request.seed,
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            warn!(status = status.as_u16(), "AI service rejected request");
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text().ok_or(OracleError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
