pub mod resources;
pub mod tools;

use crate::client::CanvaClient;
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ReadResourceParams, ToolCallParams,
};

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, client: &CanvaClient) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": "mcp-canva-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), tools::definitions())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = tools::dispatch(&params, client).await;
            let result_json = serde_json::to_value(&tool_result)
                .expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        "resources/templates/list" => {
            Some(JsonRpcResponse::success(req.id.clone(), resources::templates()))
        }

        "resources/read" => {
            let params: ReadResourceParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid resources/read params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for resources/read"),
                    ));
                }
            };

            match resources::read(&params.uri, client).await {
                Ok(result) => {
                    let result_json = serde_json::to_value(&result)
                        .expect("ResourceResult must serialize to JSON Value");
                    Some(JsonRpcResponse::success(req.id.clone(), result_json))
                }
                Err(err) => Some(JsonRpcResponse::error(req.id.clone(), err)),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}
