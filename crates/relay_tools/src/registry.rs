//! Tool registry: registration, lookup, spec export, and dispatch.

use crate::error::ToolError;
use crate::tool::Tool;
use indexmap::IndexMap;
use relay_models::{ToolCallRequest, ToolCallResult, ToolCallStatus, ToolSpec};
use serde_json::Value;
use std::sync::Arc;

/// Registry of available tools.
///
/// Stores tools by name in registration order. Registering a name twice
/// silently replaces the earlier tool (last registration wins); the
/// replacement is logged at `warn` level.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl core::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Registers a tool under its own spec name.
    ///
    /// Returns a handle to the stored tool, so the caller can keep invoking
    /// it directly.
    pub fn register(&mut self, tool: impl Tool) -> Arc<dyn Tool> {
        let name = tool.spec().name().to_string();
        let handle: Arc<dyn Tool> = Arc::new(tool);
        tracing::debug!(tool = %name, "registering tool");
        if self.tools.insert(name.clone(), Arc::clone(&handle)).is_some() {
            tracing::warn!(tool = %name, "replacing previously registered tool");
        }
        handle
    }

    /// Returns wire-format specs for the given tool names, in registry
    /// order for `None`, or in the order given, silently skipping unknown
    /// names.
    #[must_use]
    pub fn specs(&self, names: Option<&[&str]>) -> Vec<ToolSpec> {
        match names {
            None => self.tools.values().map(|tool| tool.spec()).collect(),
            Some(names) => names
                .iter()
                .filter_map(|name| self.tools.get(*name))
                .map(|tool| tool.spec())
                .collect(),
        }
    }

    /// Dispatches a model-issued tool call.
    ///
    /// Never fails outward: every error becomes a [`ToolCallResult`] with a
    /// structured status and an `{"error": ...}` payload carrying the
    /// request id, so the caller can correlate it and the model can react.
    pub async fn dispatch(&self, request: &ToolCallRequest) -> ToolCallResult {
        tracing::debug!(tool = %request.name, id = %request.id, "dispatching tool call");

        let Some(tool) = self.tools.get(&request.name) else {
            return ToolCallResult::error(
                &request.id,
                ToolCallStatus::NotFound,
                &format!("Function '{}' not found", request.name),
            );
        };

        let args = match serde_json::from_str::<Value>(&request.arguments) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return ToolCallResult::error(
                    &request.id,
                    ToolCallStatus::InvalidArguments,
                    &format!(
                        "Validation failed - arguments must be a JSON object, got {other}"
                    ),
                );
            }
            Err(err) => {
                // Unparsable argument text is not a schema mismatch; it
                // surfaces as a plain execution failure.
                return ToolCallResult::error(
                    &request.id,
                    ToolCallStatus::Failed,
                    &err.to_string(),
                );
            }
        };

        match tool.invoke(args).await {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(content) => ToolCallResult::success(&request.id, content),
                Err(err) => ToolCallResult::error(
                    &request.id,
                    ToolCallStatus::Failed,
                    &err.to_string(),
                ),
            },
            Err(err) => {
                tracing::debug!(tool = %request.name, error = %err, "tool call failed");
                ToolCallResult::error(&request.id, err.status(), &err.payload_message())
            }
        }
    }

    /// Returns a tool by name, or [`ToolError::NotFound`].
    ///
    /// Unlike [`dispatch`](Self::dispatch), lookup surfaces the error.
    pub fn get(&self, name: &str) -> Result<&dyn Tool, ToolError> {
        self.tools
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Returns whether a tool with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the names of all registered tools, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterates over `(name, tool)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Tool)> {
        self.tools
            .iter()
            .map(|(name, tool)| (name.as_str(), tool.as_ref()))
    }
}
