//! Tool layer for Relay.
//!
//! This crate turns ordinary functions into model-callable tools: it derives
//! JSON-Schema parameter descriptions, validates model-issued arguments, and
//! dispatches calls back to the wrapped functions.
//!
//! # Quick Start
//!
//! ```
//! use relay_tools::{FunctionTool, ParamKind, ParameterSpec, ToolRegistry};
//! use relay_models::ToolCallRequest;
//!
//! # async fn run() {
//! let mut registry = ToolRegistry::new();
//! registry.register(
//!     FunctionTool::builder("add", "Add two integers.")
//!         .param(ParameterSpec::new("a", ParamKind::Integer))
//!         .param(ParameterSpec::new("b", ParamKind::Integer))
//!         .handler(|call| async move {
//!             let a: i64 = call.arg("a")?;
//!             let b: i64 = call.arg("b")?;
//!             Ok(serde_json::json!(a + b))
//!         }),
//! );
//!
//! let request = ToolCallRequest::new("call_1", "add", r#"{"a": 2, "b": 3}"#);
//! let result = registry.dispatch(&request).await;
//! assert_eq!(result.content, "5");
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`ParamKind`] — semantic parameter types: schema derivation + validation
//! - [`ParameterSpec`] / [`ToolSchema`] — parameter and function schemas
//! - [`Tool`] — trait for executable tools with a wire spec
//! - [`FunctionTool`] / [`TypedTool`] — flat-signature and structured-model
//!   wrapper variants
//! - [`ToolRegistry`] — stores and dispatches tools

pub mod error;
pub mod param;
pub mod registry;
pub mod schema;
pub mod tool;

// Re-export core types at crate root.
pub use error::ToolError;
pub use param::{FunctionCall, ParamKind, model_fragment};
pub use registry::ToolRegistry;
pub use schema::{ParameterSpec, ToolSchema};
pub use tool::{FunctionTool, FunctionToolBuilder, Tool, TypedTool};
