//! Configuration for the `OpenAI`-compatible backend.

use core::time::Duration;
use std::env;

/// Environment variable consulted for the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable consulted for a base-URL override.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
/// Environment variable consulted for the organization header.
pub const ORGANIZATION_ENV: &str = "OPENAI_ORG_ID";

/// Default endpoint when no base-URL override is configured.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Connection settings for [`OpenAiClient`](super::OpenAiClient).
///
/// An API key is required unless a base-URL override points at a server that
/// does its own authentication; the client constructor enforces this.
#[derive(Debug, Clone, Default)]
pub struct OpenAiConfig {
    /// Bearer credential sent with every request.
    pub api_key: Option<String>,
    /// Endpoint override for compatible servers. Defaults to the vendor API.
    pub base_url: Option<String>,
    /// Organization identifier header, when the account needs one.
    pub organization: Option<String>,
    /// Whole-request timeout applied to the HTTP client.
    pub timeout: Option<Duration>,
}

impl OpenAiConfig {
    /// Creates a config with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Reads the config from the process environment.
    ///
    /// Consults [`API_KEY_ENV`], [`BASE_URL_ENV`], and [`ORGANIZATION_ENV`].
    /// Absent variables leave the corresponding field unset; validation
    /// happens at client construction.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok(),
            organization: env::var(ORGANIZATION_ENV).ok(),
            timeout: None,
        }
    }

    /// Sets the base-URL override.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the organization header.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
