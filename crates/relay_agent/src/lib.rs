//! Conversation orchestration for Relay.
//!
//! A [`Session`] drives the ask → complete → dispatch loop: it appends a
//! user message, requests a completion with the registry's tool specs,
//! dispatches any tool calls the model issues, feeds the results back, and
//! repeats until the model answers with plain text.
//!
//! # Example
//!
//! ```no_run
//! use relay_agent::Session;
//! use relay_model_providers::openai::{OpenAiConfig, OpenAiProvider};
//! use relay_tools::{FunctionTool, ParamKind, ParameterSpec};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAiProvider::new(OpenAiConfig::from_env())?;
//!
//! let mut session = Session::builder(provider, "gpt-4o-mini")
//!     .system("You are a terse arithmetic assistant.")
//!     .tool(
//!         FunctionTool::builder("add", "Add two integers.")
//!             .param(ParameterSpec::new("a", ParamKind::Integer))
//!             .param(ParameterSpec::new("b", ParamKind::Integer))
//!             .handler(|call| async move {
//!                 let a: i64 = call.arg("a")?;
//!                 let b: i64 = call.arg("b")?;
//!                 Ok(serde_json::json!(a + b))
//!             }),
//!     )
//!     .build();
//!
//! let reply = session.ask("What is 2 + 3?").await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

mod error;
mod session;

pub use error::SessionError;
pub use session::{DEFAULT_MAX_ROUNDS, Session, SessionBuilder};
