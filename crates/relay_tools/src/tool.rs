//! The core [`Tool`] trait and its two callable wrapper variants.
//!
//! A [`FunctionTool`] wraps a function with a flat parameter list described
//! by [`ParameterSpec`]s; a [`TypedTool`] wraps a function taking a single
//! schemars-described struct. Which variant to use is decided once, when the
//! wrapper is constructed: exactly one structured parameter means
//! [`TypedTool`], everything else [`FunctionTool`]. Both expose the same
//! wire spec and validate arguments before the wrapped function runs.

use crate::error::ToolError;
use crate::param::{FunctionCall, model_fragment};
use crate::schema::{ParameterSpec, ToolSchema};
use core::future::Future;
use core::pin::Pin;
use relay_models::ToolSpec;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

type BoxedToolFuture = Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send>>;

/// A tool that can be invoked by a model.
///
/// Tools expose a wire-format [`ToolSpec`] for the model and an async
/// [`invoke`](Tool::invoke) that validates arguments and runs the wrapped
/// function. `spec()` is pure: repeated calls yield identical output.
pub trait Tool: Send + Sync + 'static {
    /// Returns the model-facing tool spec.
    fn spec(&self) -> ToolSpec;

    /// Validates the argument object and executes the tool.
    fn invoke(
        &self,
        args: Map<String, Value>,
    ) -> Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send + '_>>;
}

// ─────────────────────────────────────────────────────────────────────
// Flat-signature variant
// ─────────────────────────────────────────────────────────────────────

type FunctionHandler = dyn Fn(FunctionCall) -> BoxedToolFuture + Send + Sync;

/// A tool wrapping a function with a flat parameter list.
///
/// Arguments are validated and bound against the declared
/// [`ParameterSpec`]s before the handler sees them: defaults are filled in
/// and required parameters enforced.
pub struct FunctionTool {
    schema: ToolSchema,
    handler: Box<FunctionHandler>,
}

impl FunctionTool {
    /// Starts building a tool with the given name and description.
    pub fn builder(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> FunctionToolBuilder {
        FunctionToolBuilder {
            schema: ToolSchema::new(name).with_description(description),
        }
    }

    /// Returns the tool's schema.
    #[must_use]
    pub fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    fn bind(&self, mut args: Map<String, Value>) -> Result<FunctionCall, ToolError> {
        let mut bound = Map::new();

        for parameter in self.schema.parameters() {
            match args.remove(&parameter.name) {
                Some(value) => {
                    parameter.kind.check(&value).map_err(|err| {
                        ToolError::invalid_arguments(format!(
                            "parameter '{}': {err}",
                            parameter.name
                        ))
                    })?;
                    bound.insert(parameter.name.clone(), value);
                }
                None => {
                    if let Some(default) = &parameter.default {
                        bound.insert(parameter.name.clone(), default.clone());
                    } else if parameter.is_required() {
                        return Err(ToolError::invalid_arguments(format!(
                            "missing required parameter '{}'",
                            parameter.name
                        )));
                    }
                }
            }
        }

        if !args.is_empty() {
            let unknown: Vec<&str> = args.keys().map(String::as_str).collect();
            tracing::warn!(
                tool = self.schema.name(),
                ?unknown,
                "dropping arguments not declared in the schema"
            );
        }

        Ok(FunctionCall::new(self.schema.name(), bound))
    }
}

impl core::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.schema.name())
            .finish_non_exhaustive()
    }
}

impl Tool for FunctionTool {
    fn spec(&self) -> ToolSpec {
        self.schema.to_spec()
    }

    fn invoke(
        &self,
        args: Map<String, Value>,
    ) -> Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send + '_>> {
        Box::pin(async move {
            let call = self.bind(args)?;
            (self.handler)(call).await
        })
    }
}

/// Builder for [`FunctionTool`].
pub struct FunctionToolBuilder {
    schema: ToolSchema,
}

impl FunctionToolBuilder {
    /// Declares a parameter.
    #[must_use]
    pub fn param(mut self, parameter: ParameterSpec) -> Self {
        self.schema = self.schema.add_parameter(parameter);
        self
    }

    /// Attaches the handler and finishes the tool.
    ///
    /// The handler receives a bound [`FunctionCall`] with typed extraction
    /// via [`FunctionCall::arg`] / [`FunctionCall::opt_arg`].
    pub fn handler<F, Fut>(self, handler: F) -> FunctionTool
    where
        F: Fn(FunctionCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        FunctionTool {
            schema: self.schema,
            handler: Box::new(move |call| Box::pin(handler(call))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Structured-model variant
// ─────────────────────────────────────────────────────────────────────

/// A tool wrapping a function that takes a single structured parameter.
///
/// The struct's own fields become the schema properties, not one wrapped
/// field, and validation is deserialization into `T`.
pub struct TypedTool<T> {
    name: String,
    description: String,
    parameters: Value,
    handler: Box<dyn Fn(T) -> BoxedToolFuture + Send + Sync>,
}

impl<T> TypedTool<T>
where
    T: JsonSchema + DeserializeOwned + Send + Sync + 'static,
{
    /// Wraps `handler` with a schema derived from `T`.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: model_fragment::<T>(),
            handler: Box::new(move |input| Box::pin(handler(input))),
        }
    }
}

impl<T> core::fmt::Debug for TypedTool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedTool")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> Tool for TypedTool<T>
where
    T: JsonSchema + DeserializeOwned + Send + Sync + 'static,
{
    fn spec(&self) -> ToolSpec {
        ToolSpec::function(&self.name, &self.description, self.parameters.clone())
    }

    fn invoke(
        &self,
        args: Map<String, Value>,
    ) -> Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send + '_>> {
        Box::pin(async move {
            let input: T = serde_json::from_value(Value::Object(args))
                .map_err(|err| ToolError::invalid_arguments(err.to_string()))?;
            (self.handler)(input).await
        })
    }
}
