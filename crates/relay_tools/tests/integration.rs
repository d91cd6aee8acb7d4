//! Integration tests for the `relay_tools` crate.

use core::future::Future;
use relay_models::{ToolCallRequest, ToolCallStatus, ToolSpec};
use relay_tools::registry::ToolRegistry;
use relay_tools::tool::Tool;
use relay_tools::{FunctionTool, ParamKind, ParameterSpec, ToolError, TypedTool};
use serde::{Deserialize, Serialize};
use serde_json::json;

fn add_tool() -> FunctionTool {
    FunctionTool::builder("add", "Add two integers.")
        .param(ParameterSpec::new("a", ParamKind::Integer).with_description("First addend."))
        .param(ParameterSpec::new("b", ParamKind::Integer).with_description("Second addend."))
        .handler(|call| async move {
            let a: i64 = call.arg("a")?;
            let b: i64 = call.arg("b")?;
            Ok(json!(a + b))
        })
}

// ─────────────────────────────────────────────────────────────────────
// 1. Tool trait manual impl
// ─────────────────────────────────────────────────────────────────────

struct ManualTool;

impl Tool for ManualTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec::function(
            "manual_tool",
            "A manually implemented tool.",
            json!({
                "type": "object",
                "properties": {
                    "input": { "type": "string" }
                },
                "required": ["input"]
            }),
        )
    }

    fn invoke(
        &self,
        args: serde_json::Map<String, serde_json::Value>,
    ) -> core::pin::Pin<
        Box<dyn Future<Output = Result<serde_json::Value, ToolError>> + Send + '_>,
    > {
        Box::pin(async move {
            let input = args
                .get("input")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ToolError::invalid_arguments("Missing 'input'"))?;
            Ok(json!({ "result": format!("echo: {}", input) }))
        })
    }
}

#[tokio::test]
async fn manual_tool_spec_and_invoke() {
    let tool = ManualTool;
    let spec = tool.spec();
    assert_eq!(spec.name(), "manual_tool");
    assert_eq!(spec.function.description, "A manually implemented tool.");

    let args = json!({"input": "hello"}).as_object().unwrap().clone();
    let result = tool.invoke(args).await.unwrap();
    assert_eq!(result["result"], "echo: hello");
}

// ─────────────────────────────────────────────────────────────────────
// 2. FunctionTool schema derivation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn function_tool_schema() {
    let tool = add_tool();
    let spec = tool.spec();
    let wire = serde_json::to_value(&spec).unwrap();

    assert_eq!(wire["type"], "function");
    assert_eq!(wire["function"]["name"], "add");
    let params = &wire["function"]["parameters"];
    assert_eq!(params["type"], "object");
    assert_eq!(params["properties"]["a"]["type"], "integer");
    assert_eq!(params["properties"]["a"]["description"], "First addend.");
    let required = params["required"].as_array().unwrap();
    assert!(required.contains(&json!("a")));
    assert!(required.contains(&json!("b")));
}

#[test]
fn primitive_fragments_carry_no_extras() {
    for (kind, name) in [
        (ParamKind::String, "string"),
        (ParamKind::Integer, "integer"),
        (ParamKind::Number, "number"),
        (ParamKind::Boolean, "boolean"),
    ] {
        let fragment = kind.fragment();
        assert_eq!(fragment["type"], name);
        assert!(fragment.get("nullable").is_none());
        assert!(fragment.get("default").is_none());
    }
}

#[test]
fn optional_parameter_is_nullable_and_not_required() {
    let tool = FunctionTool::builder("search", "Search with optional filter.")
        .param(ParameterSpec::new("query", ParamKind::String))
        .param(ParameterSpec::new(
            "filter",
            ParamKind::optional(ParamKind::String),
        ))
        .handler(|_call| async move { Ok(json!(null)) });

    let wire = serde_json::to_value(tool.spec()).unwrap();
    let params = &wire["function"]["parameters"];
    assert_eq!(params["properties"]["filter"]["type"], "string");
    assert_eq!(params["properties"]["filter"]["nullable"], true);

    let required = params["required"].as_array().unwrap();
    assert!(required.contains(&json!("query")));
    assert!(!required.contains(&json!("filter")));
}

#[test]
fn default_appears_in_schema_and_clears_required() {
    let tool = FunctionTool::builder("list_items", "List items with optional limit.")
        .param(ParameterSpec::new("category", ParamKind::String))
        .param(ParameterSpec::new("limit", ParamKind::Integer).with_default(100))
        .handler(|_call| async move { Ok(json!(null)) });

    let wire = serde_json::to_value(tool.spec()).unwrap();
    let params = &wire["function"]["parameters"];
    assert_eq!(params["properties"]["limit"]["default"], 100);
    let required = params["required"].as_array().unwrap();
    assert!(required.contains(&json!("category")));
    assert!(!required.contains(&json!("limit")));
}

#[test]
fn union_parameter_emits_one_of() {
    let tool = FunctionTool::builder("lookup", "Lookup by id or name.")
        .param(ParameterSpec::new(
            "key",
            ParamKind::Union(vec![ParamKind::Integer, ParamKind::String]),
        ))
        .handler(|_call| async move { Ok(json!(null)) });

    let wire = serde_json::to_value(tool.spec()).unwrap();
    let key = &wire["function"]["parameters"]["properties"]["key"];
    assert_eq!(
        key["oneOf"],
        json!([{"type": "integer"}, {"type": "string"}])
    );
}

// ─────────────────────────────────────────────────────────────────────
// 3. Registry specs
// ─────────────────────────────────────────────────────────────────────

#[test]
fn registry_spec_per_registered_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());
    registry.register(ManualTool);

    let specs = registry.specs(None);
    assert_eq!(specs.len(), 2);
    for spec in &specs {
        let wire = serde_json::to_value(spec).unwrap();
        assert_eq!(wire["type"], "function");
    }
    assert_eq!(specs[0].name(), "add");
    assert_eq!(specs[1].name(), "manual_tool");
}

#[test]
fn registry_spec_filter_skips_unknown_names() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());

    let specs = registry.specs(Some(&["ghost", "add"]));
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].name(), "add");
}

#[test]
fn registry_container_conveniences() {
    let mut registry = ToolRegistry::new();
    assert!(registry.is_empty());
    registry.register(add_tool());

    assert_eq!(registry.len(), 1);
    assert!(registry.has("add"));
    assert!(!registry.has("sub"));
    assert_eq!(registry.names(), vec!["add"]);
    assert!(registry.get("add").is_ok());
    assert!(matches!(
        registry.get("sub"),
        Err(ToolError::NotFound(name)) if name == "sub"
    ));
}

#[test]
fn registry_last_registration_wins() {
    let mut registry = ToolRegistry::new();
    registry.register(
        FunctionTool::builder("echo", "First version.")
            .handler(|_call| async move { Ok(json!("one")) }),
    );
    registry.register(
        FunctionTool::builder("echo", "Second version.")
            .handler(|_call| async move { Ok(json!("two")) }),
    );

    assert_eq!(registry.len(), 1);
    let spec = &registry.specs(None)[0];
    assert_eq!(spec.function.description, "Second version.");
}

// ─────────────────────────────────────────────────────────────────────
// 4. Dispatch
// ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn dispatch_round_trip() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());

    let request = ToolCallRequest::new("call_1", "add", r#"{"a": 2, "b": 3}"#);
    let result = registry.dispatch(&request).await;

    assert_eq!(result.id, "call_1");
    assert!(result.is_success());
    let value: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(value, json!(5));
}

#[tokio::test]
async fn dispatch_unknown_name_is_an_error_result() {
    let registry = ToolRegistry::new();
    let request = ToolCallRequest::new("call_2", "ghost", "{}");
    let result = registry.dispatch(&request).await;

    assert_eq!(result.status, ToolCallStatus::NotFound);
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    let message = payload["error"].as_str().unwrap().to_lowercase();
    assert!(message.contains("ghost"));
    assert!(message.contains("not found"));
}

#[tokio::test]
async fn dispatch_missing_required_field() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());

    let request = ToolCallRequest::new("call_3", "add", r#"{"a": 2}"#);
    let result = registry.dispatch(&request).await;

    assert_eq!(result.status, ToolCallStatus::InvalidArguments);
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("Validation failed"));
}

#[tokio::test]
async fn dispatch_wrong_argument_type() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());

    let request = ToolCallRequest::new("call_4", "add", r#"{"a": "two", "b": 3}"#);
    let result = registry.dispatch(&request).await;

    assert_eq!(result.status, ToolCallStatus::InvalidArguments);
}

#[tokio::test]
async fn dispatch_unparsable_arguments() {
    let mut registry = ToolRegistry::new();
    registry.register(add_tool());

    let request = ToolCallRequest::new("call_5", "add", "{not json");
    let result = registry.dispatch(&request).await;

    assert_eq!(result.status, ToolCallStatus::Failed);
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn dispatch_execution_failure() {
    let mut registry = ToolRegistry::new();
    registry.register(
        FunctionTool::builder("fail", "Always fails.")
            .handler(|_call| async move { Err::<serde_json::Value, _>(ToolError::execution("disk on fire")) }),
    );

    let request = ToolCallRequest::new("call_6", "fail", "{}");
    let result = registry.dispatch(&request).await;

    assert_eq!(result.status, ToolCallStatus::Failed);
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(payload["error"], "disk on fire");
}

#[tokio::test]
async fn dispatch_binds_defaults() {
    let mut registry = ToolRegistry::new();
    registry.register(
        FunctionTool::builder("greet", "Greet someone.")
            .param(ParameterSpec::new("name", ParamKind::String))
            .param(ParameterSpec::new("greeting", ParamKind::String).with_default("Hello"))
            .handler(|call| async move {
                let name: String = call.arg("name")?;
                let greeting: String = call.arg("greeting")?;
                Ok(json!(format!("{greeting}, {name}!")))
            }),
    );

    let request = ToolCallRequest::new("call_7", "greet", r#"{"name": "Alice"}"#);
    let result = registry.dispatch(&request).await;
    assert_eq!(result.content, "\"Hello, Alice!\"");

    let request = ToolCallRequest::new("call_8", "greet", r#"{"name": "Bob", "greeting": "Hi"}"#);
    let result = registry.dispatch(&request).await;
    assert_eq!(result.content, "\"Hi, Bob!\"");
}

// ─────────────────────────────────────────────────────────────────────
// 5. Structured-model variant
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
struct SearchParams {
    /// The query string.
    query: String,
    /// Maximum results.
    limit: u32,
}

fn search_tool() -> TypedTool<SearchParams> {
    TypedTool::new(
        "search",
        "Search with structured params.",
        |params: SearchParams| async move {
            Ok(json!(format!("query={}, limit={}", params.query, params.limit)))
        },
    )
}

#[test]
fn typed_tool_exposes_model_fields() {
    let spec = search_tool().spec();
    let wire = serde_json::to_value(&spec).unwrap();
    let params = &wire["function"]["parameters"];

    // The struct's own fields are the properties, not a single wrapped field.
    let props = params["properties"].as_object().unwrap();
    assert!(props.contains_key("query"));
    assert!(props.contains_key("limit"));
    assert_eq!(props["query"]["description"], "The query string.");

    let required = params["required"].as_array().unwrap();
    assert!(required.contains(&json!("query")));

    // Root schema metadata must not leak into the spec.
    assert!(params.get("$schema").is_none());
    assert!(params.get("title").is_none());
}

#[tokio::test]
async fn typed_tool_dispatch() {
    let mut registry = ToolRegistry::new();
    registry.register(search_tool());

    let request =
        ToolCallRequest::new("call_9", "search", r#"{"query": "rust", "limit": 10}"#);
    let result = registry.dispatch(&request).await;
    assert!(result.is_success());
    assert_eq!(result.content, "\"query=rust, limit=10\"");
}

#[tokio::test]
async fn typed_tool_validation_failure() {
    let mut registry = ToolRegistry::new();
    registry.register(search_tool());

    let request = ToolCallRequest::new("call_10", "search", r#"{"query": "rust"}"#);
    let result = registry.dispatch(&request).await;
    assert_eq!(result.status, ToolCallStatus::InvalidArguments);
    let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("Validation failed"));
}

// ─────────────────────────────────────────────────────────────────────
// 6. Spec idempotence
// ─────────────────────────────────────────────────────────────────────

#[test]
fn spec_generation_is_idempotent() {
    let flat = add_tool();
    assert_eq!(
        serde_json::to_value(flat.spec()).unwrap(),
        serde_json::to_value(flat.spec()).unwrap()
    );

    let typed = search_tool();
    assert_eq!(
        serde_json::to_value(typed.spec()).unwrap(),
        serde_json::to_value(typed.spec()).unwrap()
    );
}

// ─────────────────────────────────────────────────────────────────────
// 7. Nested model parameters
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
struct FilterConfig {
    /// Minimum relevance score.
    min_score: f64,
    /// Tags to filter by.
    tags: Vec<String>,
}

#[tokio::test]
async fn nested_model_parameter() {
    let tool = FunctionTool::builder("filtered_search", "Search with a filter config.")
        .param(ParameterSpec::new("query", ParamKind::String))
        .param(ParameterSpec::new("config", ParamKind::model::<FilterConfig>()))
        .handler(|call| async move {
            let query: String = call.arg("query")?;
            let config: FilterConfig = call.arg("config")?;
            Ok(json!(format!(
                "query={query}, min_score={}, tags={:?}",
                config.min_score, config.tags
            )))
        });

    let wire = serde_json::to_value(tool.spec()).unwrap();
    let config_schema = &wire["function"]["parameters"]["properties"]["config"];
    assert_eq!(config_schema["type"], "object");
    assert!(
        config_schema["properties"]
            .as_object()
            .unwrap()
            .contains_key("min_score")
    );

    let mut registry = ToolRegistry::new();
    registry.register(tool);

    let request = ToolCallRequest::new(
        "call_11",
        "filtered_search",
        r#"{"query": "rust", "config": {"min_score": 0.5, "tags": ["lang"]}}"#,
    );
    let result = registry.dispatch(&request).await;
    assert!(result.is_success());
    assert!(result.content.contains("min_score=0.5"));

    // A config missing its required property fails validation up front.
    let request = ToolCallRequest::new(
        "call_12",
        "filtered_search",
        r#"{"query": "rust", "config": {"min_score": 0.5}}"#,
    );
    let result = registry.dispatch(&request).await;
    assert_eq!(result.status, ToolCallStatus::InvalidArguments);
}
