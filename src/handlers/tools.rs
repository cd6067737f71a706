//! Tool registry: input schemas, descriptions, and schema-validated dispatch
//! to the typed Canva client operations.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::client::CanvaClient;
use crate::protocol::{
    GetAssetParams, GetBrandParams, GetDesignParams, GetUserParams, ListAssetsParams, ListParams,
    ToolCallParams, ToolResult, UploadImageParams,
};
use crate::schema;

/// Tool names in registration order.
const TOOLS: [(&str, &str); 9] = [
    ("get_design", "Get information about a specific design"),
    ("list_designs", "List designs with optional pagination"),
    ("get_brand", "Get information about a specific brand"),
    ("list_brands", "List brands with optional pagination"),
    ("get_asset", "Get information about a specific asset"),
    ("list_assets", "List assets with optional filtering and pagination"),
    ("upload_image", "Upload an image to Canva from a URL"),
    ("get_user", "Get information about a specific user"),
    ("list_users", "List users with optional pagination"),
];

/// `tools/list` payload: every tool with its declared input schema.
pub fn definitions() -> Value {
    let tools: Vec<Value> = TOOLS
        .iter()
        .map(|(name, description)| {
            json!({
                "name": name,
                "description": description,
                "inputSchema": input_schema(name)
                    .unwrap_or_else(|| json!({"type": "object", "properties": {}})),
            })
        })
        .collect();
    json!({ "tools": tools })
}

fn id_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "required": [field],
        "properties": {
            field: {"type": "string", "description": description}
        }
    })
}

fn list_schema(extra: Option<Value>) -> Value {
    let mut properties = json!({
        "limit": {
            "type": "integer",
            "minimum": 1,
            "maximum": 100,
            "default": 50,
            "description": "Number of items to return (1-100)"
        },
        "startAfter": {
            "type": "string",
            "description": "Token for pagination"
        }
    });
    if let (Some(obj), Some(Value::Object(extra))) = (properties.as_object_mut(), extra) {
        obj.extend(extra);
    }
    json!({"type": "object", "properties": properties})
}

/// Declared input schema for a tool, if the tool exists.
pub fn input_schema(name: &str) -> Option<Value> {
    match name {
        "get_design" => Some(id_schema("designId", "The unique identifier for a design")),
        "get_brand" => Some(id_schema("brandId", "The unique identifier for a brand")),
        "get_asset" => Some(id_schema("assetId", "The unique identifier for an asset")),
        "get_user" => Some(id_schema("userId", "The unique identifier for a user")),
        "list_designs" | "list_brands" | "list_users" => Some(list_schema(None)),
        "list_assets" => Some(list_schema(Some(json!({
            "type": {
                "type": "string",
                "enum": ["IMAGE", "VIDEO", "AUDIO", "FONT"],
                "description": "Type of asset"
            }
        })))),
        "upload_image" => Some(json!({
            "type": "object",
            "required": ["url"],
            "properties": {
                "url": {"type": "string", "description": "URL of the image to upload"},
                "title": {"type": "string", "description": "Title for the resource"},
                "brandId": {"type": "string", "description": "The unique identifier for a brand"}
            }
        })),
        _ => None,
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: &Value) -> Result<T, ToolResult> {
    serde_json::from_value(args.clone())
        .map_err(|e| ToolResult::error(format!("Invalid arguments for {tool}: {e}")))
}

/// Dispatch a `tools/call` to the matching domain operation.
///
/// Arguments are validated against the tool's declared schema before any
/// typed deserialization or dispatch, so out-of-range values (e.g. a `limit`
/// of 101) never reach the client.
pub async fn dispatch(params: &ToolCallParams, client: &CanvaClient) -> ToolResult {
    let name = params.name.as_str();
    let Some(schema) = input_schema(name) else {
        return ToolResult::error(format!("Unknown tool: {name}"));
    };

    let args = params.arguments.clone().unwrap_or_else(|| json!({}));
    if let Err(e) = schema::validate_arguments(&schema, &args) {
        return ToolResult::error(format!("Invalid arguments for {name}: {e}"));
    }

    let outcome = match name {
        "get_design" => match parse_args::<GetDesignParams>(name, &args) {
            Ok(p) => client.get_design(&p.design_id).await,
            Err(r) => return r,
        },
        "list_designs" => match parse_args::<ListParams>(name, &args) {
            Ok(p) => client.list_designs(p.limit, p.start_after.as_deref()).await,
            Err(r) => return r,
        },
        "get_brand" => match parse_args::<GetBrandParams>(name, &args) {
            Ok(p) => client.get_brand(&p.brand_id).await,
            Err(r) => return r,
        },
        "list_brands" => match parse_args::<ListParams>(name, &args) {
            Ok(p) => client.list_brands(p.limit, p.start_after.as_deref()).await,
            Err(r) => return r,
        },
        "get_asset" => match parse_args::<GetAssetParams>(name, &args) {
            Ok(p) => client.get_asset(&p.asset_id).await,
            Err(r) => return r,
        },
        "list_assets" => match parse_args::<ListAssetsParams>(name, &args) {
            Ok(p) => {
                client
                    .list_assets(p.limit, p.start_after.as_deref(), p.asset_type.as_deref())
                    .await
            }
            Err(r) => return r,
        },
        "upload_image" => match parse_args::<UploadImageParams>(name, &args) {
            Ok(p) => {
                client
                    .upload_image(&p.url, p.title.as_deref(), p.brand_id.as_deref())
                    .await
            }
            Err(r) => return r,
        },
        "get_user" => match parse_args::<GetUserParams>(name, &args) {
            Ok(p) => client.get_user(&p.user_id).await,
            Err(r) => return r,
        },
        "list_users" => match parse_args::<ListParams>(name, &args) {
            Ok(p) => client.list_users(p.limit, p.start_after.as_deref()).await,
            Err(r) => return r,
        },
        _ => unreachable!("input_schema covers exactly the dispatchable tools"),
    };

    match outcome {
        Ok(value) => ToolResult::json(&value),
        Err(e) => {
            tracing::debug!(tool = name, error = %e, "tool call failed");
            ToolResult::error(e)
        }
    }
}
