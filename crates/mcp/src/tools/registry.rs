// Tool definitions: declarative parameter schemas, validation, registry.

use crate::auth::AuthToken;
use crate::protocol::ToolSchema;
use lingate_core::{GatewayError, GatewayResult};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Primitive parameter types a tool can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
}

impl ParamKind {
    pub fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.as_i64().is_some(),
        }
    }
}

/// One parameter of a tool's schema.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self { name, kind, required: true, description }
    }

    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self { name, kind, required: false, description }
    }
}

/// A tool's static definition: name, description, parameter schema.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamSpec>,
}

impl ToolSpec {
    /// Render the JSON Schema advertised by tools/list.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.json_type(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(param.name);
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    pub fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema(),
        }
    }

    /// Validate call arguments against the schema. Runs before the
    /// handler, which may then assume parameters are present and typed.
    /// A null value counts as absent, matching the upstream convention.
    pub fn validate(&self, args: &Value) -> GatewayResult<()> {
        let object = match args {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => {
                return Err(GatewayError::InvalidParameters {
                    message: "arguments must be an object".to_string(),
                })
            }
        };

        for param in &self.params {
            let value = object.and_then(|map| map.get(param.name)).filter(|v| !v.is_null());
            match value {
                Some(v) if !param.kind.matches(v) => {
                    return Err(GatewayError::wrong_param_type(
                        param.name,
                        param.kind.json_type(),
                    ));
                }
                None if param.required => {
                    return Err(GatewayError::missing_param(
                        param.name,
                        param.kind.json_type(),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// The tool's static definition.
    fn spec(&self) -> ToolSpec;

    /// Execute with already-validated arguments, shaping the envelope
    /// body. Each tool performs exactly one upstream operation.
    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let spec = tool.spec();
        self.tools.insert(spec.name.to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.spec().schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Argument accessors for handlers. Validation has already run, so the
// error paths here are unreachable in practice; they exist so handlers
// never panic on a contract slip.

pub(crate) fn required_str<'a>(args: &'a Value, name: &str) -> GatewayResult<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::missing_param(name, "string"))
}

pub(crate) fn optional_str<'a>(args: &'a Value, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

pub(crate) fn optional_int(args: &Value, name: &str) -> Option<i64> {
    args.get(name).and_then(Value::as_i64)
}
