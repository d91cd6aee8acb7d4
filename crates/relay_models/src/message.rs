//! Role-tagged conversation messages.

use crate::tool::{ToolCallRequest, ToolCallResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Standing instructions, first in the transcript.
    System,
    /// The human (or host application) side of the conversation.
    User,
    /// The model's replies, possibly carrying tool calls.
    Assistant,
    /// A tool-execution result fed back to the model.
    Tool,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        };
        f.write_str(name)
    }
}

/// One message in an [`Exchange`](crate::Exchange).
///
/// Content may be empty when an assistant message carries only tool calls.
/// `meta` holds opaque provider metadata (usage counts, finish reason) and is
/// never serialized onto the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Author role.
    pub role: Role,
    /// Text content.
    #[serde(default)]
    pub content: String,
    /// Optional author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool calls issued by the model. Only meaningful on assistant messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallRequest>>,
    /// Identifier of the call this message answers. Only on tool messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Opaque provider metadata, excluded from serialization.
    #[serde(skip)]
    pub meta: Option<Value>,
}

impl Message {
    fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
            tool_calls: None,
            tool_call_id: None,
            meta: None,
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::text(Role::System, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::text(Role::User, content)
    }

    /// Creates an assistant message with text content.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::text(Role::Assistant, content)
    }

    /// Creates an assistant message carrying tool calls.
    #[must_use]
    pub fn assistant_with_calls(content: impl Into<String>, calls: Vec<ToolCallRequest>) -> Self {
        Self {
            tool_calls: Some(calls),
            ..Self::text(Role::Assistant, content)
        }
    }

    /// Creates a tool message from a dispatch result.
    ///
    /// The result's content becomes the message content and its id the
    /// `tool_call_id`, correlating it back to the originating call.
    #[must_use]
    pub fn tool(result: &ToolCallResult) -> Self {
        Self {
            tool_call_id: Some(result.id.clone()),
            ..Self::text(Role::Tool, result.content.clone())
        }
    }

    /// Sets the author name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches opaque provider metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns the tool calls on this message, empty when none.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolCallRequest] {
        self.tool_calls.as_deref().unwrap_or_default()
    }

    /// Returns whether this message carries at least one tool call.
    #[must_use]
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls().is_empty()
    }
}
