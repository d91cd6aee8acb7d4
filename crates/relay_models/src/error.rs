//! Error types for completion and configuration.

use core::time::Duration;

/// Errors from a completion endpoint call.
///
/// These propagate out of the orchestration loop; tool-execution failures do
/// not appear here because dispatch encodes them as ordinary tool results.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limited by the provider.
    #[error("rate limited{}", .retry_after.map(|d| format!(", retry after {d:?}")).unwrap_or_default())]
    RateLimited {
        /// Suggested time to wait before retrying.
        retry_after: Option<Duration>,
    },

    /// Error building the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Error parsing the response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Error returned by the completion provider.
    #[error("provider error: {message}")]
    Provider {
        /// HTTP status code if available.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// The underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Construction-time configuration errors.
///
/// Fatal and raised immediately; the orchestration loop never sees a
/// half-configured gateway.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API credential available and no base-URL override given.
    #[error("missing API key: set {env_var} or configure a base URL override")]
    MissingApiKey {
        /// The environment variable that was consulted.
        env_var: &'static str,
    },

    /// The requested model is not served by the configured endpoint.
    #[error("model '{name}' is not available")]
    UnknownModel {
        /// The requested model name.
        name: String,
    },

    /// A configuration value could not be used as given.
    #[error("invalid configuration value for {field}: {message}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        message: String,
    },
}
