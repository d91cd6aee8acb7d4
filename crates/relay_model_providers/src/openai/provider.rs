//! `OpenAI` [`CompletionProvider`] implementation.

use super::client::OpenAiClient;
use super::config::OpenAiConfig;
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatResponseMessage, ChatToolCall,
    ChatToolCallFunction,
};
use async_trait::async_trait;
use relay_models::{
    CompletionError, CompletionProvider, ConfigError, Message, ModelInfo, Role, ToolCallRequest,
    ToolSpec,
};

/// [`CompletionProvider`] backed by an `OpenAI`-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a new provider.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config has neither an API key nor
    /// a base-URL override.
    pub fn new(config: OpenAiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: OpenAiClient::new(config)?,
        })
    }

    /// Creates a provider from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(OpenAiConfig::from_env())
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }

    /// Checks that the endpoint serves the given model.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownModel`] when the model is not listed; listing
    /// transport failures are reported as an invalid `model` value.
    pub async fn verify_model(&self, model: &str) -> Result<(), ConfigError> {
        let models = self
            .client
            .list_models()
            .await
            .map_err(|err| ConfigError::InvalidValue {
                field: "model",
                message: format!("could not list models: {err}"),
            })?;

        if models.iter().any(|info| info.id == model) {
            Ok(())
        } else {
            Err(ConfigError::UnknownModel {
                name: model.to_string(),
            })
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolSpec],
    ) -> Result<Message, CompletionError> {
        let request = convert_request(model, messages, tools);
        let response = self.client.create_chat_completion(&request).await?;
        convert_response(response)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        self.client.list_models().await
    }
}

// ---------------------------------------------------------------------------
// Request conversion (Relay -> wire)
// ---------------------------------------------------------------------------

fn convert_request(model: &str, messages: &[Message], tools: &[ToolSpec]) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: messages.iter().map(convert_message).collect(),
        tools: if tools.is_empty() {
            None
        } else {
            Some(tools.to_vec())
        },
    }
}

fn convert_message(message: &Message) -> ChatMessage {
    let tool_calls = message.tool_calls.as_ref().map(|calls| {
        calls
            .iter()
            .map(|call| ChatToolCall {
                id: call.id.clone(),
                kind: "function".to_string(),
                function: ChatToolCallFunction {
                    name: call.name.clone(),
                    arguments: call.arguments.clone(),
                },
            })
            .collect::<Vec<_>>()
    });

    // Assistant messages that carry only tool calls send null content.
    let content = if message.content.is_empty() && tool_calls.is_some() {
        None
    } else {
        Some(message.content.clone())
    };

    ChatMessage {
        role: message.role,
        content,
        name: message.name.clone(),
        tool_calls,
        tool_call_id: message.tool_call_id.clone(),
    }
}

// ---------------------------------------------------------------------------
// Response conversion (wire -> Relay)
// ---------------------------------------------------------------------------

fn convert_response(response: ChatCompletionResponse) -> Result<Message, CompletionError> {
    let meta = serde_json::json!({
        "id": response.id,
        "model": response.model,
        "finish_reason": response.choices.first().and_then(|c| c.finish_reason.clone()),
        "usage": response.usage,
    });

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::InvalidResponse("response has no choices".to_string()))?;

    Ok(convert_response_message(choice.message).with_meta(meta))
}

fn convert_response_message(message: ChatResponseMessage) -> Message {
    let calls: Vec<ToolCallRequest> = message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .filter_map(|call| {
            if call.kind != "function" {
                tracing::warn!(
                    id = %call.id,
                    kind = %call.kind,
                    "dropping tool call of unsupported kind"
                );
                return None;
            }
            Some(ToolCallRequest::new(
                call.id,
                call.function.name,
                call.function.arguments,
            ))
        })
        .collect();

    if message.role != Role::Assistant {
        tracing::warn!(role = %message.role, "completion message has unexpected role");
    }

    let content = message.content.unwrap_or_default();
    if calls.is_empty() {
        Message::assistant(content)
    } else {
        Message::assistant_with_calls(content, calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_models::ToolCallResult;
    use serde_json::json;

    #[test]
    fn request_wire_shape() {
        let messages = vec![
            Message::system("You are helpful."),
            Message::user("What is 2 + 3?"),
        ];
        let tools = vec![ToolSpec::function(
            "add",
            "Add two integers.",
            json!({"type": "object", "properties": {}, "required": []}),
        )];

        let request = convert_request("gpt-4o-mini", &messages, &tools);
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["model"], "gpt-4o-mini");
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][1]["content"], "What is 2 + 3?");
        assert_eq!(wire["tools"][0]["type"], "function");
        assert_eq!(wire["tools"][0]["function"]["name"], "add");
    }

    #[test]
    fn assistant_with_only_calls_sends_null_content() {
        let message = Message::assistant_with_calls(
            "",
            vec![ToolCallRequest::new("call_1", "add", r#"{"a":2,"b":3}"#)],
        );
        let wire = serde_json::to_value(convert_message(&message)).unwrap();
        assert_eq!(wire["content"], serde_json::Value::Null);
        assert_eq!(wire["tool_calls"][0]["function"]["name"], "add");
        assert_eq!(wire["tool_calls"][0]["type"], "function");
    }

    #[test]
    fn tool_message_wire_shape() {
        let result = ToolCallResult::success("call_1", "5");
        let wire = serde_json::to_value(convert_message(&Message::tool(&result))).unwrap();
        assert_eq!(wire["role"], "tool");
        assert_eq!(wire["tool_call_id"], "call_1");
        assert_eq!(wire["content"], "5");
    }

    #[test]
    fn response_parsing_with_tool_calls() {
        let body = json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "finish_reason": "tool_calls",
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "add", "arguments": "{\"a\":2,\"b\":3}"}
                    }]
                }
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });
        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let message = convert_response(response).unwrap();

        assert_eq!(message.role, Role::Assistant);
        assert!(message.content.is_empty());
        assert_eq!(message.tool_calls().len(), 1);
        assert_eq!(message.tool_calls()[0].name, "add");

        let meta = message.meta.unwrap();
        assert_eq!(meta["finish_reason"], "tool_calls");
        assert_eq!(meta["usage"]["total_tokens"], 15);
    }

    #[test]
    fn response_without_choices_is_invalid() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"id": "x", "choices": []})).unwrap();
        assert!(matches!(
            convert_response(response),
            Err(CompletionError::InvalidResponse(_))
        ));
    }
}
