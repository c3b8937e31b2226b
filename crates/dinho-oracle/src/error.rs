//! # Oracle Error Types
//!
//! Error types for calls to the external AI service.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Oracle Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  NotConfigured  │  │  Http           │  │  EmptyResponse          │ │
//! │  │  InvalidConfig  │  │  Status         │  │  MalformedResponse      │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  None of these ever reach the numerology core. The Oracle service      │
//! │  turns them into a fallback message or an absent dream reading.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Failures of the AI collaborator.
#[derive(Debug, Error)]
pub enum OracleError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// No API key was provided, so no client exists.
    #[error("AI service not configured: missing API key")]
    NotConfigured,

    /// Invalid oracle configuration.
    #[error("Invalid oracle configuration: {0}")]
    InvalidConfig(String),

    /// Invalid service URL.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Request Errors
    // =========================================================================
    /// The request was rejected before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("AI service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No answer within the configured timeout.
    #[error("AI request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The service answered without any text.
    #[error("AI service returned an empty response")]
    EmptyResponse,

    /// The text could not be parsed into the expected shape.
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OracleError::Http(format!("timeout: {}", err))
        } else if err.is_decode() {
            OracleError::MalformedResponse(err.to_string())
        } else {
            OracleError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OracleError {
    fn from(err: serde_json::Error) -> Self {
        OracleError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for OracleError {
    fn from(err: url::ParseError) -> Self {
        OracleError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for OracleError {
    fn from(err: std::io::Error) -> Self {
        OracleError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for OracleError {
    fn from(err: toml::de::Error) -> Self {
        OracleError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for OracleError {
    fn from(err: toml::ser::Error) -> Self {
        OracleError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization (for retry logic)
// =============================================================================

impl OracleError {
    /// Returns true if the request may succeed when sent again.
    ///
    /// ## Retryable Errors
    /// - Network failures and timeouts
    /// - HTTP 429 (rate limited) and 5xx
    ///
    /// ## Non-Retryable Errors
    /// - Configuration errors
    /// - Other 4xx statuses (bad key, bad request)
    /// - Empty or malformed answers
    pub fn is_retryable(&self) -> bool {
        match self {
            OracleError::Http(_) | OracleError::Timeout(_) => true,
            OracleError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            OracleError::NotConfigured
                | OracleError::InvalidConfig(_)
                | OracleError::InvalidUrl(_)
                | OracleError::ConfigLoadFailed(_)
                | OracleError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(OracleError::Http("connection reset".into()).is_retryable());
        assert!(OracleError::Timeout(20).is_retryable());
        assert!(OracleError::Status {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(OracleError::Status {
            status: 429,
            body: String::new()
        }
        .is_retryable());

        assert!(!OracleError::Status {
            status: 403,
            body: String::new()
        }
        .is_retryable());
        assert!(!OracleError::NotConfigured.is_retryable());
        assert!(!OracleError::EmptyResponse.is_retryable());
    }

    #[test]
    fn test_config_errors() {
        assert!(OracleError::NotConfigured.is_config_error());
        assert!(OracleError::InvalidUrl("x".into()).is_config_error());
        assert!(!OracleError::Timeout(1).is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = OracleError::Status {
            status: 400,
            body: "API key not valid".into(),
        };
        assert_eq!(err.to_string(), "AI service returned HTTP 400: API key not valid");
    }
}
