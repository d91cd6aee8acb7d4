//! Tool wire types: specs sent to the model, calls received back, results
//! returned from dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────
// Tool specs
// ─────────────────────

/// Wire-format description of a callable tool.
///
/// Serializes to the `{"type": "function", "function": {...}}` shape that
/// tool-calling completion APIs expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Spec kind. Always `"function"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The function being described.
    pub function: FunctionSpec,
}

/// The function half of a [`ToolSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Name the model calls the function by. Unique within a registry.
    pub name: String,
    /// Human-readable description of what the function does.
    pub description: String,
    /// JSON Schema for the function's parameters.
    ///
    /// An object schema: `{"type": "object", "properties": {...},
    /// "required": [...]}`.
    pub parameters: Value,
}

impl ToolSpec {
    /// Creates a function spec from name, description, and parameter schema.
    #[must_use]
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

// ─────────────────────
// Tool calls
// ─────────────────────

/// A model-issued request to invoke a tool by name.
///
/// `arguments` is the raw JSON text exactly as the model produced it; the
/// registry parses and validates it at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Identifier correlating this call to its result.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// JSON-encoded argument object.
    pub arguments: String,
}

impl ToolCallRequest {
    /// Creates a new tool call request.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Outcome kind of a dispatched tool call.
///
/// A structured discriminant so callers never have to sniff error-message
/// prefixes to tell a validation failure from a crashed tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCallStatus {
    /// The tool ran and returned a value.
    #[default]
    Success,
    /// No tool with the requested name is registered.
    NotFound,
    /// The supplied arguments failed parsing or validation.
    InvalidArguments,
    /// The tool itself returned an error.
    Failed,
}

/// Result of dispatching a [`ToolCallRequest`].
///
/// Always produced, never raised: failures are encoded in `status` and an
/// `{"error": ...}` content payload so the model can see and react to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// Identifier copied from the originating request.
    pub id: String,
    /// Outcome kind.
    #[serde(default)]
    pub status: ToolCallStatus,
    /// JSON-encoded result or error payload.
    pub content: String,
}

impl ToolCallResult {
    /// Creates a successful result with the given serialized content.
    #[must_use]
    pub fn success(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: ToolCallStatus::Success,
            content: content.into(),
        }
    }

    /// Creates a failed result, encoding `message` as `{"error": message}`.
    #[must_use]
    pub fn error(id: impl Into<String>, status: ToolCallStatus, message: &str) -> Self {
        Self {
            id: id.into(),
            status,
            content: serde_json::json!({ "error": message }).to_string(),
        }
    }

    /// Returns whether the call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ToolCallStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_spec_wire_shape() {
        let spec = ToolSpec::function(
            "get_weather",
            "Look up the weather.",
            serde_json::json!({"type": "object", "properties": {}, "required": []}),
        );
        let wire = serde_json::to_value(&spec).unwrap();
        assert_eq!(wire["type"], "function");
        assert_eq!(wire["function"]["name"], "get_weather");
        assert_eq!(wire["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn error_result_payload() {
        let result = ToolCallResult::error("call_1", ToolCallStatus::NotFound, "no such tool");
        assert!(!result.is_success());
        let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(payload["error"], "no such tool");
    }
}
