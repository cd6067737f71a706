pub mod request;
pub mod response;

pub use request::{
    GetAssetParams, GetBrandParams, GetDesignParams, GetUserParams, JsonRpcRequest,
    ListAssetsParams, ListParams, ReadResourceParams, RpcId, ToolCallParams, UploadImageParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ResourceContent, ResourceResult, ToolResult, ToolResultContent,
};
