//! `OpenAI`-compatible provider backend.
//!
//! Speaks the chat-completions API over plain HTTP; the base-URL override in
//! [`OpenAiConfig`] points it at any compatible server.

mod client;
mod config;
mod provider;
mod types;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use provider::OpenAiProvider;
