//! The [`Session`] orchestration loop.

use crate::error::SessionError;
use futures::StreamExt;
use relay_models::{
    CompletionProvider, Exchange, Message, ToolCallRequest, ToolCallResult,
};
use relay_tools::{Tool, ToolRegistry};
use std::sync::Arc;

/// Default completion-round cap per [`Session::ask`] call.
pub const DEFAULT_MAX_ROUNDS: usize = 8;

/// A conversation session: one exchange, one tool registry, one provider.
///
/// Each call to [`ask`](Session::ask) appends a user message and loops
/// (completion, tool dispatch, result append) until the model replies
/// without tool calls or the round limit trips. The session owns its state
/// exclusively; concurrent sessions never share an exchange or registry.
pub struct Session {
    exchange: Exchange,
    tools: ToolRegistry,
    provider: Arc<dyn CompletionProvider>,
    model: String,
    max_rounds: usize,
    parallel_tools: bool,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.model)
            .field("tools", &self.tools.names())
            .field("messages", &self.exchange.len())
            .finish()
    }
}

impl Session {
    /// Starts building a session for the given provider and model.
    pub fn builder(
        provider: impl CompletionProvider,
        model: impl Into<String>,
    ) -> SessionBuilder {
        SessionBuilder {
            provider: Arc::new(provider),
            model: model.into(),
            system: None,
            tools: ToolRegistry::new(),
            max_rounds: DEFAULT_MAX_ROUNDS,
            parallel_tools: false,
        }
    }

    /// Appends a user message and runs the loop to the model's final reply.
    ///
    /// # Errors
    ///
    /// Fails when a gateway call fails, or with
    /// [`SessionError::RoundLimit`] when the model keeps issuing tool calls.
    /// Tool failures do not fail the run; they are fed back to the model as
    /// error-payload tool results.
    pub async fn ask(&mut self, text: impl Into<String>) -> Result<Message, SessionError> {
        self.exchange.push_user(text);
        self.run().await
    }

    /// Runs the completion loop over the current exchange.
    pub async fn run(&mut self) -> Result<Message, SessionError> {
        let specs = self.tools.specs(None);

        for round in 0..self.max_rounds {
            let reply = self
                .provider
                .complete(&self.model, self.exchange.messages(), &specs)
                .await?;
            self.exchange.push(reply.clone());

            let calls = reply.tool_calls().to_vec();
            if calls.is_empty() {
                return Ok(reply);
            }

            tracing::debug!(round, count = calls.len(), "dispatching tool calls");
            let results = if self.parallel_tools {
                self.dispatch_parallel(&calls).await
            } else {
                self.dispatch_sequential(&calls).await
            };

            for result in &results {
                self.exchange.push(Message::tool(result));
            }
        }

        Err(SessionError::RoundLimit {
            limit: self.max_rounds,
        })
    }

    async fn dispatch_sequential(&self, calls: &[ToolCallRequest]) -> Vec<ToolCallResult> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            results.push(self.tools.dispatch(call).await);
        }
        results
    }

    /// Fans sibling calls out through a bounded buffer.
    ///
    /// The buffer preserves input order, so results land in the exchange in
    /// request order regardless of completion order.
    async fn dispatch_parallel(&self, calls: &[ToolCallRequest]) -> Vec<ToolCallResult> {
        futures::stream::iter(calls.iter().map(|call| self.tools.dispatch(call)))
            .buffered(calls.len().max(1))
            .collect()
            .await
    }

    /// Returns the conversation transcript.
    #[must_use]
    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    /// Returns the tool registry.
    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Returns the tool registry for further registration.
    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Clears the transcript, preserving a leading system message.
    pub fn reset(&mut self) {
        self.exchange.clear();
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    system: Option<String>,
    tools: ToolRegistry,
    max_rounds: usize,
    parallel_tools: bool,
}

impl SessionBuilder {
    /// Sets the system message placed first in the exchange.
    #[must_use]
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Registers a tool. Can be called multiple times.
    #[must_use]
    pub fn tool(mut self, tool: impl Tool) -> Self {
        self.tools.register(tool);
        self
    }

    /// Replaces the registry wholesale with a pre-built one.
    #[must_use]
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Caps the completion rounds per [`Session::ask`] call.
    #[must_use]
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Dispatches sibling tool calls concurrently.
    ///
    /// Results are still appended in request order.
    #[must_use]
    pub fn parallel_tools(mut self, enabled: bool) -> Self {
        self.parallel_tools = enabled;
        self
    }

    /// Finishes the session.
    #[must_use]
    pub fn build(self) -> Session {
        let exchange = match self.system {
            Some(system) => Exchange::with_system(system),
            None => Exchange::new(),
        };
        Session {
            exchange,
            tools: self.tools,
            provider: self.provider,
            model: self.model,
            max_rounds: self.max_rounds,
            parallel_tools: self.parallel_tools,
        }
    }
}
