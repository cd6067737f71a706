use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Arguments for the `get_design` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetDesignParams {
    #[serde(rename = "designId")]
    pub design_id: String,
}

/// Arguments for the `get_brand` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetBrandParams {
    #[serde(rename = "brandId")]
    pub brand_id: String,
}

/// Arguments for the `get_asset` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAssetParams {
    #[serde(rename = "assetId")]
    pub asset_id: String,
}

/// Arguments for the `get_user` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserParams {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Arguments shared by `list_designs`, `list_brands`, and `list_users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    #[serde(rename = "startAfter")]
    pub start_after: Option<String>,
}

/// Arguments for `list_assets` — listing plus an optional type filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAssetsParams {
    pub limit: Option<u32>,
    #[serde(rename = "startAfter")]
    pub start_after: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

/// Arguments for the `upload_image` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadImageParams {
    pub url: String,
    pub title: Option<String>,
    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,
}
