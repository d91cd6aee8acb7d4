//! Schema types for tool parameter metadata.
//!
//! [`ParameterSpec`] describes a single parameter; [`ToolSchema`] assembles a
//! parameter list into the object schema and wire spec a tool exposes.

use crate::param::ParamKind;
use relay_models::ToolSpec;
use serde_json::Value;

/// Schema information for a single tool parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name, unique within a function.
    pub name: String,
    /// Semantic type.
    pub kind: ParamKind,
    /// Human description, merged into the fragment.
    pub description: Option<String>,
    /// Whether the parameter must be supplied. Derived at construction:
    /// optional kinds are never required, and setting a default clears it.
    pub required: bool,
    /// Default value bound when the argument is absent.
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// Creates a parameter of the given kind.
    ///
    /// Requiredness is derived: parameters are required unless their kind is
    /// optional or a default is attached later.
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        let required = !matches!(kind, ParamKind::Optional(_));
        Self {
            name: name.into(),
            kind,
            description: None,
            required,
            default: None,
        }
    }

    /// Sets the human description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a default value; the parameter is no longer required.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }

    /// Returns whether a caller must supply this parameter.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required && self.default.is_none()
    }

    /// Produces this parameter's schema fragment.
    ///
    /// The description and default are merged in without overwriting any key
    /// the type derivation already set.
    #[must_use]
    pub fn fragment(&self) -> Value {
        let mut fragment = self.kind.fragment();
        if let Some(obj) = fragment.as_object_mut() {
            if let Some(description) = &self.description {
                obj.entry("description")
                    .or_insert_with(|| Value::String(description.clone()));
            }
            if let Some(default) = &self.default {
                obj.entry("default").or_insert_with(|| default.clone());
            }
        }
        fragment
    }
}

/// A tool's complete parameter schema.
///
/// Built once at registration time and immutable afterwards; regenerating a
/// schema means re-registering the tool.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    name: String,
    /// Tool description.
    description: String,
    /// The parameters, in declaration order.
    parameters: Vec<ParameterSpec>,
    /// Object schema derived from `parameters`.
    schema: Value,
}

impl ToolSchema {
    /// Creates an empty schema with the given tool name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    /// Sets the tool description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a parameter and rebuilds the object schema.
    #[must_use]
    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self.rebuild();
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the derived object schema.
    #[must_use]
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Converts this schema into the wire-format [`ToolSpec`].
    #[must_use]
    pub fn to_spec(&self) -> ToolSpec {
        ToolSpec::function(&self.name, &self.description, self.schema.clone())
    }

    fn rebuild(&mut self) {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for parameter in &self.parameters {
            properties.insert(parameter.name.clone(), parameter.fragment());
            if parameter.is_required() {
                required.push(parameter.name.clone());
            }
        }

        self.schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        });
    }
}
