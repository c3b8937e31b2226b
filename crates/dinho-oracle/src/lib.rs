//! # dinho-oracle: AI Oracle and Dream Book
//!
//! Everything that talks to the external text-generation service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          dinho-oracle                                   │
//! │                                                                         │
//! │   apps/cli ──► Oracle ──► dyn CompletionClient ──► GeminiClient ──► 🌐  │
//! │                  │                                                      │
//! │                  ├── prompts (oracle text, dream text, JSON schema)     │
//! │                  ├── timeout + retry + backoff                          │
//! │                  └── fallback messages                                  │
//! │                                                                         │
//! │   OracleConfig: defaults ──► oracle.toml ──► environment               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numerology in `dinho-core` never waits on or depends on anything in
//! this crate.
//!
//! ## Modules
//!
//! - [`oracle`] - Oracle service with fallback policy
//! - [`client`] - `CompletionClient` trait and request type
//! - [`gemini`] - Gemini REST client
//! - [`prompts`] - Prompt texts and response schema
//! - [`config`] - Layered configuration
//! - [`error`] - Error types

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod oracle;
pub mod prompts;

pub use client::{CompletionClient, CompletionRequest};
pub use config::{ApiSettings, OracleConfig, RequestSettings};
pub use error::{OracleError, OracleResult};
pub use gemini::GeminiClient;
pub use oracle::{
    parse_dream_reading, Oracle, CLOUDED_MESSAGE, DEFAULT_MESSAGE, SLEEPING_MESSAGE,
};
