//! # Completion Client
//!
//! The single capability the app needs from an AI service: turn a prompt
//! into text.
//!
//! ```text
//! ┌──────────────────────┐   CompletionRequest    ┌────────────────────────┐
//! │  Oracle (oracle.rs)  │ ─────────────────────► │  dyn CompletionClient  │
//! │                      │ ◄───────────────────── │  • GeminiClient        │
//! └──────────────────────┘   OracleResult<String> │  • test fakes          │
//!                                                 └────────────────────────┘
//! ```
//!
//! Clients are constructed explicitly and injected into the
//! [`Oracle`](crate::oracle::Oracle); nothing here is global.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::OracleResult;

/// One request to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Natural-language prompt.
    pub prompt: String,

    /// Sampling seed for reproducible answers.
    pub seed: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// When set, the service is asked for JSON matching this schema.
    pub response_schema: Option<Value>,
}

impl CompletionRequest {
    /// A plain text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        CompletionRequest {
            prompt: prompt.into(),
            seed: None,
            temperature: None,
            response_schema: None,
        }
    }

    /// Sets the sampling seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Requests a JSON answer matching `schema`.
    pub fn with_json_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Returns true if a structured (JSON) answer is expected.
    pub fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// A text-generation backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the request and returns the raw text of the answer.
    ///
    /// Implementations return [`OracleError::EmptyResponse`](crate::OracleError::EmptyResponse)
    /// when the service answers without text.
    async fn complete(&self, request: &CompletionRequest) -> OracleResult<String>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let req = CompletionRequest::text("olá")
            .with_seed(42)
            .with_temperature(0.3)
            .with_json_schema(json!({"type": "OBJECT"}));
        assert_eq!(req.prompt, "olá");
        assert_eq!(req.seed, Some(42));
        assert_eq!(req.temperature, Some(0.3));
        assert!(req.is_structured());
        assert!(!CompletionRequest::text("x").is_structured());
    }
}
