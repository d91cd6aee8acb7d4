//! Conversation data model and provider interface for Relay.
//!
//! Provides the message/transcript types shared by every Relay crate and the
//! [`CompletionProvider`] trait that completion gateways implement,
//! decoupling the tool layer and the orchestration loop from any concrete
//! vendor API.
//!
//! # Overview
//!
//! - [`Message`] / [`Exchange`] — role-tagged messages and the ordered
//!   transcript they live in.
//! - [`ToolCallRequest`] / [`ToolCallResult`] — a model-issued call and the
//!   outcome of dispatching it.
//! - [`ToolSpec`] — the wire-format description of a callable tool.
//! - [`CompletionProvider`] — the completion endpoint boundary.

pub mod error;
pub mod exchange;
pub mod message;
pub mod provider;
pub mod tool;

pub use error::{CompletionError, ConfigError};
pub use exchange::Exchange;
pub use message::{Message, Role};
pub use provider::{CompletionProvider, ModelInfo};
pub use tool::{FunctionSpec, ToolCallRequest, ToolCallResult, ToolCallStatus, ToolSpec};
