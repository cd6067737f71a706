//! Integration tests for the JSON-RPC method dispatch and the tool registry.
//!
//! Tests exercise `handlers::dispatch` with synthetic requests and the tool
//! dispatcher directly, in placeholder mode unless a mock remote is needed.

use httpmock::prelude::*;
use serde_json::{json, Value};

use mcp_canva_server::client::CanvaClient;
use mcp_canva_server::config::{Credentials, ServerConfig};
use mcp_canva_server::handlers;
use mcp_canva_server::protocol::{JsonRpcRequest, RpcId, ToolCallParams};

fn placeholder_client() -> CanvaClient {
    CanvaClient::new(ServerConfig {
        credentials: Credentials {
            app_id: None,
            api_key: None,
        },
        base_url: "http://127.0.0.1:1".into(),
    })
}

fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    }))
    .unwrap()
}

async fn call_tool(client: &CanvaClient, name: &str, arguments: Value) -> (bool, String) {
    let params = ToolCallParams {
        name: name.to_string(),
        arguments: Some(arguments),
    };
    let result = handlers::tools::dispatch(&params, client).await;
    let value = serde_json::to_value(&result).unwrap();
    let is_error = value
        .get("isError")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let text = value["content"][0]["text"].as_str().unwrap().to_string();
    (is_error, text)
}

// ---------------------------------------------------------------------------
// Protocol methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_reports_identity_and_capabilities() {
    let client = placeholder_client();
    let resp = handlers::dispatch(&request("initialize", None), &client)
        .await
        .unwrap();
    assert_eq!(resp.id, Some(RpcId::Number(1)));

    let result = resp.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "mcp-canva-server");
    assert!(result["capabilities"].get("tools").is_some());
    assert!(result["capabilities"].get("resources").is_some());
}

#[tokio::test]
async fn initialized_notification_gets_no_response() {
    let client = placeholder_client();
    let resp = handlers::dispatch(&request("notifications/initialized", None), &client).await;
    assert!(resp.is_none());
}

#[tokio::test]
async fn tools_list_declares_all_nine_tools() {
    let client = placeholder_client();
    let resp = handlers::dispatch(&request("tools/list", None), &client)
        .await
        .unwrap();
    let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 9);

    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    for expected in [
        "get_design",
        "list_designs",
        "get_brand",
        "list_brands",
        "get_asset",
        "list_assets",
        "upload_image",
        "get_user",
        "list_users",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }

    for tool in &tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(tool["description"].is_string());
    }
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let client = placeholder_client();
    let resp = handlers::dispatch(&request("designs/complete", None), &client)
        .await
        .unwrap();
    assert_eq!(resp.error.unwrap().code, -32601);
}

#[tokio::test]
async fn tools_call_without_params_is_invalid_params() {
    let client = placeholder_client();
    let resp = handlers::dispatch(&request("tools/call", None), &client)
        .await
        .unwrap();
    assert_eq!(resp.error.unwrap().code, -32602);
}

// ---------------------------------------------------------------------------
// Tool calls in placeholder mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_design_returns_fixed_mock_id_for_any_requested_id() {
    let client = placeholder_client();
    // The placeholder discards the requested id by design.
    let (is_error, text) = call_tool(&client, "get_design", json!({"designId": "d-123"})).await;
    assert!(!is_error);
    let design: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(design["id"], "mock-design-id");
}

#[tokio::test]
async fn tool_output_is_two_space_indented_json() {
    let client = placeholder_client();
    let (is_error, text) = call_tool(&client, "list_users", json!({})).await;
    assert!(!is_error);
    assert!(text.starts_with("{\n  \""), "expected 2-space indent: {text:?}");
    let users: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(users["nextPageToken"], "mock-next-page-token");
}

#[tokio::test]
async fn every_tool_succeeds_in_placeholder_mode() {
    let client = placeholder_client();
    let calls = [
        ("get_design", json!({"designId": "d"})),
        ("list_designs", json!({})),
        ("get_brand", json!({"brandId": "b"})),
        ("list_brands", json!({"limit": 10})),
        ("get_asset", json!({"assetId": "a"})),
        ("list_assets", json!({"type": "IMAGE"})),
        ("upload_image", json!({"url": "https://example.com/i.png"})),
        ("get_user", json!({"userId": "u"})),
        ("list_users", json!({"startAfter": "tok"})),
    ];
    for (name, args) in calls {
        let (is_error, text) = call_tool(&client, name, args).await;
        assert!(!is_error, "{name} failed: {text}");
    }
}

#[tokio::test]
async fn unknown_tool_is_an_error_result() {
    let client = placeholder_client();
    let (is_error, text) = call_tool(&client, "delete_design", json!({})).await;
    assert!(is_error);
    assert!(text.contains("Unknown tool: delete_design"));
}

// ---------------------------------------------------------------------------
// Schema validation before dispatch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn limit_boundaries_are_enforced() {
    let client = placeholder_client();

    for ok in [1, 100] {
        let (is_error, text) = call_tool(&client, "list_assets", json!({"limit": ok})).await;
        assert!(!is_error, "limit {ok} should pass: {text}");
    }
    for bad in [0, 101, 150] {
        let (is_error, text) = call_tool(&client, "list_assets", json!({"limit": bad})).await;
        assert!(is_error, "limit {bad} should be rejected");
        assert!(text.contains("Invalid arguments for list_assets"), "{text}");
    }
}

#[tokio::test]
async fn rejected_limit_never_reaches_the_remote() {
    let server = MockServer::start_async().await;
    let catch_all = server
        .mock_async(|when, then| {
            when.path_matches(Regex::new(".*").unwrap());
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = CanvaClient::new(ServerConfig {
        credentials: Credentials {
            app_id: Some("app".into()),
            api_key: Some("key".into()),
        },
        base_url: server.base_url(),
    });

    let (is_error, _) = call_tool(&client, "list_assets", json!({"limit": 150})).await;
    assert!(is_error);
    assert_eq!(catch_all.hits_async().await, 0);
}

#[tokio::test]
async fn asset_type_must_be_a_known_variant() {
    let client = placeholder_client();
    let (is_error, text) = call_tool(&client, "list_assets", json!({"type": "GIF"})).await;
    assert!(is_error);
    assert!(text.contains("Invalid arguments for list_assets"), "{text}");

    for ty in ["IMAGE", "VIDEO", "AUDIO", "FONT"] {
        let (is_error, _) = call_tool(&client, "list_assets", json!({"type": ty})).await;
        assert!(!is_error, "type {ty} should pass");
    }
}

#[tokio::test]
async fn required_fields_are_enforced() {
    let client = placeholder_client();

    let (is_error, text) = call_tool(&client, "get_design", json!({})).await;
    assert!(is_error);
    assert!(text.contains("Invalid arguments for get_design"), "{text}");

    let (is_error, _) = call_tool(&client, "upload_image", json!({"title": "no url"})).await;
    assert!(is_error);
}

#[tokio::test]
async fn malformed_upload_url_is_a_setup_error() {
    let client = placeholder_client();
    let (is_error, text) =
        call_tool(&client, "upload_image", json!({"url": "not a url"})).await;
    assert!(is_error);
    assert!(text.contains("Error setting up request"), "{text}");
}

// ---------------------------------------------------------------------------
// Remote failures surfaced through the tool result
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_rejection_appears_verbatim_in_tool_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/brands/b1");
            then.status(403).body("forbidden");
        })
        .await;

    let client = CanvaClient::new(ServerConfig {
        credentials: Credentials {
            app_id: Some("app".into()),
            api_key: Some("key".into()),
        },
        base_url: server.base_url(),
    });

    let (is_error, text) = call_tool(&client, "get_brand", json!({"brandId": "b1"})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Canva API Error: 403 - forbidden");
}
