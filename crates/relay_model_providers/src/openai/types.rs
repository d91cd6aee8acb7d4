//! Chat-completions API wire types.
//!
//! These match the `OpenAI` chat-completions specification; tool specs and
//! roles reuse the `relay_models` types, which already serialize to the
//! wire shape.

use relay_models::{Role, ToolSpec};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The model to use.
    pub model: String,
    /// Input messages, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Tool specs the model may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
}

/// A message in the request transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: Role,
    /// Text content. `None` when an assistant message carries only tool
    /// calls.
    pub content: Option<String>,
    /// Author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool calls issued by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatToolCall>>,
    /// The call a tool message answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// A tool call on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatToolCall {
    /// Call identifier.
    pub id: String,
    /// Call kind. Always `"function"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The function being called.
    pub function: ChatToolCallFunction,
}

/// The function half of a wire tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatToolCallFunction {
    /// Function name.
    pub name: String,
    /// JSON-encoded argument object, exactly as the model produced it.
    pub arguments: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion identifier.
    pub id: String,
    /// Model that produced the completion.
    #[serde(default)]
    pub model: Option<String>,
    /// Completion choices; the first is the one used.
    pub choices: Vec<ChatChoice>,
    /// Token usage.
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message.
    pub message: ChatResponseMessage,
    /// Reason generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    /// Author role. Always assistant.
    pub role: Role,
    /// Text content; null when only tool calls were produced.
    #[serde(default)]
    pub content: Option<String>,
    /// Tool calls requested by the model.
    #[serde(default)]
    pub tool_calls: Option<Vec<ChatToolCall>>,
}

/// Token usage reported with a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    /// Tokens in the completion.
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    /// Prompt plus completion.
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Model Listing
// ─────────────────────────────────────────────────────────────────────────────

/// Response body from `GET /v1/models`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    /// The served models.
    pub data: Vec<ModelEntry>,
}

/// One entry in the model listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    /// Model identifier.
    pub id: String,
    /// Owning organization.
    #[serde(default)]
    pub owned_by: Option<String>,
}
