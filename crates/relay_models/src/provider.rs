//! The [`CompletionProvider`] trait for completion gateways.

use crate::error::CompletionError;
use crate::message::Message;
use crate::tool::ToolSpec;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A model served by a completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier, as used in completion requests.
    pub id: String,
    /// Owning organization, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

/// Trait implemented by completion gateways.
///
/// A gateway accepts the full transcript plus the available tool specs and
/// returns the single next assistant message (text, tool calls, or both).
/// Everything past this boundary (transport, authentication, the vendor
/// response envelope) is the implementation's concern.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Requests the next assistant message for the given transcript.
    ///
    /// # Arguments
    ///
    /// * `model` - The model name to complete with
    /// * `messages` - The transcript so far, oldest first
    /// * `tools` - Tool specs the model may call; empty slice for none
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolSpec],
    ) -> Result<Message, CompletionError>;

    /// Lists the models served by this endpoint.
    ///
    /// The default implementation reports listing as unsupported.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        Err(CompletionError::InvalidRequest(
            "model listing is not supported by this provider".to_string(),
        ))
    }
}
