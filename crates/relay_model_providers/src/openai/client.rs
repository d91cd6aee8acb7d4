//! HTTP client for `OpenAI`-compatible endpoints.

use super::config::{API_KEY_ENV, DEFAULT_BASE_URL, OpenAiConfig};
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ModelList};
use core::time::Duration;
use relay_models::{CompletionError, ConfigError, ModelInfo};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};

/// HTTP client for the chat-completions and models endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    organization: Option<String>,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client from the given config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no API key is configured and no
    /// base-URL override is given, or when the HTTP client cannot be built
    /// from the configured timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self, ConfigError> {
        if config.api_key.is_none() && config.base_url.is_none() {
            return Err(ConfigError::MissingApiKey {
                env_var: API_KEY_ENV,
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| ConfigError::InvalidValue {
            field: "timeout",
            message: err.to_string(),
        })?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            api_key: config.api_key,
            organization: config.organization,
            base_url,
        })
    }

    /// Sends a chat completion request.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await
            .map_err(|err| CompletionError::Http(err.to_string()))?;

        Self::read_json(response).await
    }

    /// Lists the models served by the endpoint.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        let url = format!("{}/v1/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|err| CompletionError::Http(err.to_string()))?;

        let listing: ModelList = Self::read_json(response).await?;
        Ok(listing
            .data
            .into_iter()
            .map(|entry| ModelInfo {
                id: entry.id,
                owned_by: entry.owned_by,
            })
            .collect())
    }

    fn headers(&self) -> Result<HeaderMap, CompletionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &self.api_key {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}"))
                    .map_err(|err| CompletionError::Auth(format!("Invalid API key: {err}")))?,
            );
        }
        if let Some(organization) = &self.organization {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(organization).map_err(|err| {
                    CompletionError::InvalidRequest(format!("Invalid organization header: {err}"))
                })?,
            );
        }
        Ok(headers)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CompletionError> {
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response
            .text()
            .await
            .map_err(|err| CompletionError::Http(err.to_string()))?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(CompletionError::Auth(body));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited { retry_after });
        }
        if !status.is_success() {
            return Err(CompletionError::Provider {
                status: Some(status.as_u16()),
                message: body,
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            CompletionError::InvalidResponse(format!("Failed to parse response: {err}\nBody: {body}"))
        })
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
}

impl core::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
