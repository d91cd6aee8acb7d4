//! # Relay Internal Library
//!
//! Re-exports the core Relay crates for convenience.

/// Conversation data model and provider interface.
pub use relay_models;

/// Tool schema derivation, validation, and dispatch.
pub use relay_tools;

/// Completion provider backends.
pub use relay_model_providers;

/// Session orchestration loop.
pub use relay_agent;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use relay_agent::{Session, SessionBuilder, SessionError};
    pub use relay_model_providers::openai::{OpenAiConfig, OpenAiProvider};
    pub use relay_models::{
        CompletionError, CompletionProvider, ConfigError, Exchange, Message, Role,
        ToolCallRequest, ToolCallResult, ToolCallStatus, ToolSpec,
    };
    pub use relay_tools::{
        FunctionCall, FunctionTool, ParamKind, ParameterSpec, Tool, ToolError, ToolRegistry,
        TypedTool,
    };
}
