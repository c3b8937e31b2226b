//! # Oracle Service
//!
//! Front door of the crate: the daily oracle message and the dream book.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Oracle Outcomes                                  │
//! │                                                                         │
//! │  reading_for(birth)                 interpret_dream(text)               │
//! │  ──────────────────                 ─────────────────────               │
//! │  no client     ──► SLEEPING_MESSAGE no client      ──► None             │
//! │  empty answer  ──► DEFAULT_MESSAGE  empty answer   ──► None             │
//! │  any failure   ──► CLOUDED_MESSAGE  bad JSON       ──► None             │
//! │  text          ──► text             any failure    ──► None             │
//! │                                     JSON object    ──► Some(reading)    │
//! │                                                                         │
//! │  Each attempt is bounded by `timeout_secs`. Retryable failures          │
//! │  (network, timeout, 429, 5xx) are retried up to `max_retries` times     │
//! │  with exponential backoff.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A configured key with an invalid configuration (bad URL, zero timeout)
//! leaves the oracle unavailable rather than failing construction; calls
//! then get the failure fallback.
//!
//! The `try_*` variants expose the underlying [`OracleError`] for callers
//! that want to report it.

use std::sync::Arc;

use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use chrono::NaiveDate;
use dinho_core::validation::validate_dream_text;
use dinho_core::{derive_seed, DreamReading, SeedNormalization};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::{OracleConfig, RequestSettings};
use crate::error::{OracleError, OracleResult};
use crate::gemini::GeminiClient;
use crate::prompts::{dream_prompt, dream_schema, oracle_prompt};

/// Shown when no API key is configured.
pub const SLEEPING_MESSAGE: &str = "O Oráculo está dormindo. (Chave de API não configurada)";

/// Shown when the service answers without text.
pub const DEFAULT_MESSAGE: &str = "A sorte sorri para quem acredita.";

/// Shown when the request fails.
pub const CLOUDED_MESSAGE: &str = "As nuvens encobrem o oráculo hoje. Tente novamente mais tarde.";

/// What the oracle talks to.
#[derive(Clone)]
enum Backend {
    /// No API key configured.
    Asleep,
    /// A key is configured but the client could not be built.
    Unavailable(String),
    /// Ready to send requests.
    Ready(Arc<dyn CompletionClient>),
}

/// AI oracle and dream interpreter.
#[derive(Clone)]
pub struct Oracle {
    backend: Backend,
    settings: RequestSettings,
}

impl Oracle {
    /// Creates an oracle around an explicit client.
    pub fn new(client: Arc<dyn CompletionClient>, settings: RequestSettings) -> Self {
        Oracle {
            backend: Backend::Ready(client),
            settings,
        }
    }

    /// Creates an oracle without a client. Every call falls back.
    pub fn asleep(settings: RequestSettings) -> Self {
        Oracle {
            backend: Backend::Asleep,
            settings,
        }
    }

    /// Creates an oracle from configuration. Never fails.
    ///
    /// Without an API key the oracle is asleep. With a key but an invalid
    /// configuration it is unavailable and every call gets the failure
    /// fallback.
    pub fn from_config(config: &OracleConfig) -> Self {
        let settings = config.request.clone();
        let client = config
            .validate()
            .and_then(|()| GeminiClient::from_config(config));

        match client {
            Ok(client) => {
                info!(model = %config.api.model, "Oracle awake");
                Self::new(Arc::new(client), settings)
            }
            Err(OracleError::NotConfigured) => {
                warn!("API key missing, oracle is asleep");
                Self::asleep(settings)
            }
            Err(e) => {
                warn!(error = %e, "Oracle client could not be built, oracle is unavailable");
                Oracle {
                    backend: Backend::Unavailable(e.to_string()),
                    settings,
                }
            }
        }
    }

    /// Returns true if a client is available.
    pub fn is_awake(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Request settings in use.
    pub fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    // =========================================================================
    // Oracle Message
    // =========================================================================

    /// Returns a short luck message for `birth_date`. Never fails.
    pub async fn reading_for(&self, birth_date: NaiveDate) -> String {
        match self.try_reading_for(birth_date).await {
            Ok(text) => text,
            Err(OracleError::NotConfigured) => SLEEPING_MESSAGE.to_string(),
            Err(OracleError::EmptyResponse) => DEFAULT_MESSAGE.to_string(),
            Err(e) => {
                warn!(error = %e, "Oracle reading failed");
                CLOUDED_MESSAGE.to_string()
            }
        }
    }

    /// Requests the luck message, exposing failures.
    pub async fn try_reading_for(&self, birth_date: NaiveDate) -> OracleResult<String> {
        let client = self.client()?;
        let request = CompletionRequest::text(oracle_prompt(birth_date));

        let text = self.complete_with_retry(client, &request).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    // =========================================================================
    // Dream Book
    // =========================================================================

    /// Interprets a dream. Returns `None` on any failure.
    pub async fn interpret_dream(&self, dream_text: &str) -> Option<DreamReading> {
        match self.try_interpret_dream(dream_text).await {
            Ok(reading) => Some(reading),
            Err(OracleError::NotConfigured) => {
                warn!("API key missing for dream interpretation");
                None
            }
            Err(e) => {
                warn!(error = %e, "Dream interpretation failed");
                None
            }
        }
    }

    /// Interprets a dream, exposing failures.
    ///
    /// The sampling seed is derived from the lowercased, trimmed text so
    /// the same dream is asked the same way every time.
    pub async fn try_interpret_dream(&self, dream_text: &str) -> OracleResult<DreamReading> {
        let client = self.client()?;
        let text =
            validate_dream_text(dream_text).map_err(|e| OracleError::InvalidRequest(e.to_string()))?;

        let seed = derive_seed(text, SeedNormalization::LowercaseTrim);
        debug!(seed, "Interpreting dream");

        let request = CompletionRequest::text(dream_prompt(text))
            .with_seed(seed)
            .with_temperature(self.settings.dream_temperature)
            .with_json_schema(dream_schema());

        let raw = self.complete_with_retry(client, &request).await?;
        parse_dream_reading(&raw)
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn client(&self) -> OracleResult<&Arc<dyn CompletionClient>> {
        match &self.backend {
            Backend::Ready(client) => Ok(client),
            Backend::Asleep => Err(OracleError::NotConfigured),
            Backend::Unavailable(reason) => Err(OracleError::InvalidConfig(reason.clone())),
        }
    }

    /// Sends a request with a per-attempt timeout, retrying retryable
    /// failures with exponential backoff.
    async fn complete_with_retry(
        &self,
        client: &Arc<dyn CompletionClient>,
        request: &CompletionRequest,
    ) -> OracleResult<String> {
        let mut backoff = self.create_backoff();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let result = match timeout(self.settings.timeout(), client.complete(request)).await {
                Ok(result) => result,
                Err(_) => Err(OracleError::Timeout(self.settings.timeout_secs)),
            };

            let err = match result {
                Ok(text) => return Ok(text),
                Err(e) => e,
            };

            if !err.is_retryable() || attempt > self.settings.max_retries {
                return Err(err);
            }

            match backoff.next_backoff() {
                Some(wait) => {
                    warn!(
                        client = client.name(),
                        attempt,
                        error = %err,
                        wait_ms = wait.as_millis() as u64,
                        "AI request failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                }
                None => return Err(err),
            }
        }
    }

    fn create_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: self.settings.initial_backoff(),
            max_interval: self.settings.max_backoff(),
            multiplier: 2.0,
            max_elapsed_time: None,
            ..Default::default()
        }
    }
}

/// Parses the interpreter's answer into a [`DreamReading`].
///
/// Tolerates a surrounding markdown code fence.
pub fn parse_dream_reading(raw: &str) -> OracleResult<DreamReading> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
