//! Completion provider backends for Relay.
//!
//! Each backend implements
//! [`CompletionProvider`](relay_models::CompletionProvider) against a vendor
//! endpoint. The one provider shipped here speaks the OpenAI
//! chat-completions wire format, which a base-URL override extends to any
//! compatible server.
//!
//! # Usage
//!
//! ```no_run
//! use relay_model_providers::openai::{OpenAiConfig, OpenAiProvider};
//!
//! // Reads OPENAI_API_KEY (and optional OPENAI_BASE_URL / OPENAI_ORG_ID).
//! let provider = OpenAiProvider::new(OpenAiConfig::from_env()).unwrap();
//! ```
//!
//! Constructing a provider with neither an API key nor a base-URL override
//! fails immediately with a [`ConfigError`](relay_models::ConfigError); a
//! misconfigured gateway is never handed to the orchestration loop.

pub mod openai;

pub use openai::{OpenAiClient, OpenAiConfig, OpenAiProvider};
