//! Error types for session orchestration.

use relay_models::CompletionError;

/// Errors that abort a session run.
///
/// Tool-execution failures never appear here: dispatch encodes them as
/// ordinary tool results the model can react to. What does abort a run is a
/// failed gateway call, or a conversation that keeps issuing tool calls past
/// the configured round limit.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The completion gateway call failed.
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// The model kept requesting tool calls past the round limit.
    #[error("tool-call round limit of {limit} exceeded")]
    RoundLimit {
        /// The configured maximum number of completion rounds.
        limit: usize,
    },
}
