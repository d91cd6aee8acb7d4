//! Parameter types and the schema deriver.
//!
//! [`ParamKind`] is the semantic type of a single tool parameter. It drives
//! both halves of the tool layer: [`fragment`](ParamKind::fragment) derives
//! the JSON-Schema description sent to the model, and
//! [`check`](ParamKind::check) validates an incoming argument value before
//! the wrapped function runs.

use crate::error::ToolError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// The semantic type of a tool parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    /// A UTF-8 string.
    String,
    /// An integer.
    Integer,
    /// A floating-point number.
    Number,
    /// A boolean.
    Boolean,
    /// A homogeneous sequence of the element kind.
    Array(Box<ParamKind>),
    /// A string-keyed mapping with values of the given kind.
    Map(Box<ParamKind>),
    /// A nested structured model, carrying its derived object schema.
    ///
    /// Build with [`ParamKind::model`].
    Model(Value),
    /// An optional value: the inner kind or null.
    Optional(Box<ParamKind>),
    /// A union of two or more kinds.
    Union(Vec<ParamKind>),
    /// Any JSON value. The degradation target when derivation fails.
    Any,
}

impl ParamKind {
    /// Derives the kind for a structured model type.
    ///
    /// Never fails: if the model's schema cannot be serialized, the kind
    /// degrades to an any-typed fragment carrying an `error` description so
    /// schema generation can proceed for the rest of the function.
    #[must_use]
    pub fn model<T: JsonSchema>() -> Self {
        Self::Model(model_fragment::<T>())
    }

    /// Shorthand for an optional value of the given kind.
    #[must_use]
    pub fn optional(inner: ParamKind) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Shorthand for an array of the given element kind.
    #[must_use]
    pub fn array(items: ParamKind) -> Self {
        Self::Array(Box::new(items))
    }

    /// Shorthand for a string-keyed map of the given value kind.
    #[must_use]
    pub fn map(values: ParamKind) -> Self {
        Self::Map(Box::new(values))
    }

    /// Produces the JSON-Schema fragment describing this kind.
    ///
    /// `Optional` emits the inner fragment plus `nullable: true`; `Union`
    /// emits `oneOf` over every member fragment.
    #[must_use]
    pub fn fragment(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Array(items) => json!({ "type": "array", "items": items.fragment() }),
            Self::Map(values) => json!({
                "type": "object",
                "additionalProperties": values.fragment(),
            }),
            Self::Model(schema) => schema.clone(),
            Self::Optional(inner) => {
                let mut fragment = inner.fragment();
                if let Some(obj) = fragment.as_object_mut() {
                    obj.insert("nullable".to_string(), json!(true));
                }
                fragment
            }
            Self::Union(members) => json!({
                "oneOf": members.iter().map(Self::fragment).collect::<Vec<_>>(),
            }),
            Self::Any => json!({ "type": "any" }),
        }
    }

    /// Checks a JSON value against this kind.
    ///
    /// Returns a human-readable mismatch description on failure. This is the
    /// generic validate step: structural only, no coercion.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Self::String => expect(value.is_string(), "string", value),
            Self::Integer => expect(value.is_i64() || value.is_u64(), "integer", value),
            Self::Number => expect(value.is_number(), "number", value),
            Self::Boolean => expect(value.is_boolean(), "boolean", value),
            Self::Array(items) => {
                let elements = value
                    .as_array()
                    .ok_or_else(|| mismatch("array", value))?;
                for (index, element) in elements.iter().enumerate() {
                    items
                        .check(element)
                        .map_err(|err| format!("item {index}: {err}"))?;
                }
                Ok(())
            }
            Self::Map(values) => {
                let entries = value
                    .as_object()
                    .ok_or_else(|| mismatch("object", value))?;
                for (key, entry) in entries {
                    values
                        .check(entry)
                        .map_err(|err| format!("key '{key}': {err}"))?;
                }
                Ok(())
            }
            Self::Model(schema) => check_model(schema, value),
            Self::Optional(inner) => {
                if value.is_null() {
                    Ok(())
                } else {
                    inner.check(value)
                }
            }
            Self::Union(members) => {
                if members.iter().any(|member| member.check(value).is_ok()) {
                    Ok(())
                } else {
                    Err(format!(
                        "value matches none of the union members, got {}",
                        type_name(value)
                    ))
                }
            }
            Self::Any => Ok(()),
        }
    }
}

fn expect(ok: bool, expected: &str, value: &Value) -> Result<(), String> {
    if ok { Ok(()) } else { Err(mismatch(expected, value)) }
}

fn mismatch(expected: &str, value: &Value) -> String {
    format!("expected {expected}, got {}", type_name(value))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks a value against a model fragment: it must be an object carrying
/// every required property. Degraded (any-typed) fragments accept anything.
fn check_model(schema: &Value, value: &Value) -> Result<(), String> {
    if schema.get("type").and_then(Value::as_str) != Some("object") {
        return Ok(());
    }
    let entries = value.as_object().ok_or_else(|| mismatch("object", value))?;
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !entries.contains_key(name) {
                return Err(format!("missing required property '{name}'"));
            }
        }
    }
    Ok(())
}

/// Derives a self-contained object fragment for a schemars-described type.
///
/// Subschemas are inlined so the fragment carries no `$defs` references, and
/// root metadata (`$schema`, `title`) is stripped. Derivation failure
/// degrades to an any-typed fragment with an `error` description.
#[must_use]
pub fn model_fragment<T: JsonSchema>() -> Value {
    let mut settings = schemars::generate::SchemaSettings::default();
    settings.inline_subschemas = true;
    let mut generator = settings.into_generator();
    let schema = generator.root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(mut value) => {
            if let Some(obj) = value.as_object_mut() {
                obj.remove("$schema");
                obj.remove("title");
                obj.entry("type").or_insert(json!("object"));
            }
            value
        }
        Err(err) => json!({ "type": "any", "error": err.to_string() }),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Bound function calls
// ─────────────────────────────────────────────────────────────────────

/// A validated, bound argument set handed to a tool handler.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Arguments as a JSON object map, defaults already filled in.
    pub arguments: Map<String, Value>,
}

impl FunctionCall {
    /// Creates a new function call.
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Creates a function call from a [`Value`], returning an error if
    /// `arguments` is not a JSON object.
    pub fn from_value(name: impl Into<String>, arguments: Value) -> Result<Self, ToolError> {
        match arguments {
            Value::Object(map) => Ok(Self::new(name, map)),
            other => Err(ToolError::invalid_arguments(format!(
                "arguments must be a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Deserializes a required argument by name.
    pub fn arg<T: DeserializeOwned>(&self, name: &str) -> Result<T, ToolError> {
        let value = self.arguments.get(name).ok_or_else(|| {
            ToolError::invalid_arguments(format!("missing required parameter '{name}'"))
        })?;

        serde_json::from_value(value.clone()).map_err(|err| {
            ToolError::invalid_arguments(format!("parameter '{name}': {err}"))
        })
    }

    /// Deserializes an optional argument by name. Returns `None` if missing
    /// or null.
    pub fn opt_arg<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ToolError> {
        match self.arguments.get(name) {
            None => Ok(None),
            Some(value) if value.is_null() => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|err| {
                ToolError::invalid_arguments(format!("parameter '{name}': {err}"))
            }),
        }
    }
}
