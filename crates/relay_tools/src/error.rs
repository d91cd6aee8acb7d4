//! Error types for tool execution.

use relay_models::ToolCallStatus;
use thiserror::Error;

/// Errors that can occur while resolving, validating, or running a tool.
///
/// These never escape [`dispatch`](crate::registry::ToolRegistry::dispatch);
/// the registry folds them into [`relay_models::ToolCallResult`] payloads.
/// They do surface from direct lookup and invocation APIs.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with the given name is registered.
    #[error("Function '{0}' not found")]
    NotFound(String),

    /// Supplied arguments failed parsing or schema validation.
    #[error("Validation failed - {0}")]
    InvalidArguments(String),

    /// The tool function itself failed.
    #[error("Execution error: {0}")]
    Execution(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Creates an [`InvalidArguments`](Self::InvalidArguments).
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Creates an [`Execution`](Self::Execution).
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Returns the dispatch status this error maps to.
    #[must_use]
    pub fn status(&self) -> ToolCallStatus {
        match self {
            Self::NotFound(_) => ToolCallStatus::NotFound,
            Self::InvalidArguments(_) => ToolCallStatus::InvalidArguments,
            Self::Execution(_) | Self::Serialization(_) => ToolCallStatus::Failed,
        }
    }

    /// Returns the message shown to the model in an error payload.
    ///
    /// Lookup and validation errors keep their full display form; execution
    /// failures surface the underlying message alone.
    #[must_use]
    pub fn payload_message(&self) -> String {
        match self {
            Self::Execution(msg) => msg.clone(),
            Self::Serialization(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
