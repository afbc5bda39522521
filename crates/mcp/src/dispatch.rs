//! Protocol dispatcher: parse, route, resolve auth, validate, invoke.
//!
//! Terminal in one hop. Every tool invocation produces exactly one
//! envelope; the only thing that escapes as a protocol-level failure is
//! a body that cannot be parsed at all.

use crate::auth::{AuthProvider, RequestContext};
use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use lingate_core::{GatewayError, GatewayResult};
use serde_json::{json, Value};
use tracing::{debug, warn};

const SERVER_NAME: &str = "lingate";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a gateway error into the tool-error envelope.
pub fn error_envelope(err: &GatewayError) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
        "isError": true,
    })
}

pub struct Dispatcher {
    registry: ToolRegistry,
    auth: AuthProvider,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, auth: AuthProvider) -> Self {
        Self { registry, auth }
    }

    /// Handle one inbound JSON-RPC body. Returns `None` for
    /// notifications, which expect no response.
    pub async fn handle(&self, body: &str, ctx: &RequestContext) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "unparseable request body");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);
        match request.method.as_str() {
            "initialize" => Some(JsonRpcResponse::success(id, self.initialize_result())),
            "notifications/initialized" => None,
            "tools/list" => {
                // The static catalog needs no auth.
                let result = ListToolsResult { tools: self.registry.list_schemas() };
                Some(JsonRpcResponse::success(id, result))
            }
            "tools/call" => Some(self.call_tool(id, request.params, ctx).await),
            other => {
                Some(JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)))
            }
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        }
    }

    async fn call_tool(&self, id: Value, params: Option<Value>, ctx: &RequestContext) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            _ => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("tools/call requires {name, arguments}"),
                );
            }
        };

        let envelope = match self.invoke(&params, ctx).await {
            Ok(body) => body,
            Err(err) => {
                debug!(tool = %params.name, error = %err, "tool call failed");
                error_envelope(&err)
            }
        };
        JsonRpcResponse::success(id, envelope)
    }

    /// The tool-call pipeline: auth, lookup, validate, invoke. Any error
    /// kind surfacing from here is rendered into the envelope by the
    /// caller, so nothing escapes the dispatcher boundary.
    async fn invoke(&self, params: &CallToolParams, ctx: &RequestContext) -> GatewayResult<Value> {
        let token = self.auth.resolve(ctx).await?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| GatewayError::UnknownTool { name: params.name.clone() })?;

        tool.spec().validate(&params.arguments)?;

        debug!(tool = %params.name, "invoking tool");
        tool.call(&token, &params.arguments).await
    }
}
