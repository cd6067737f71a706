//! Request dispatcher and typed domain operations for the Canva REST API.
//!
//! Every outbound call funnels through [`CanvaClient::request`]: it either
//! performs a single authenticated HTTP call (no retry, no backoff, no
//! timeout override) or, when credentials are absent, substitutes a
//! deterministic placeholder payload without touching the network. All
//! failures are normalized into the three-kind [`ApiError`] taxonomy.

use reqwest::Method;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::mock;

/// Default page size for listing operations.
const DEFAULT_PAGE_LIMIT: u32 = 50;
/// Maximum page size accepted by listing operations.
const MAX_PAGE_LIMIT: u32 = 100;

/// Normalized failure taxonomy for remote calls.
///
/// Exactly one kind is produced per failed dispatch; none is retryable.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The remote service answered with a non-success status.
    #[error("Canva API Error: {status} - {body}")]
    RemoteRejected { status: u16, body: String },

    /// The request was sent but no response arrived.
    #[error("No response received from Canva API")]
    NoResponse,

    /// The call failed before leaving the process.
    #[error("Error setting up request: {0}")]
    RequestSetupFailed(String),
}

/// Client for the Canva REST API with transparent placeholder mode.
#[derive(Debug, Clone)]
pub struct CanvaClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl CanvaClient {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Dispatch a single request.
    ///
    /// Unconfigured credentials short-circuit to the placeholder provider;
    /// that branch performs no network call and cannot fail. Otherwise one
    /// authenticated HTTP call is made and the raw decoded JSON body is
    /// returned unchanged on success; a non-JSON success body passes
    /// through as a string value.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        if !self.config.credentials.is_configured() {
            tracing::debug!(%path, "serving placeholder data (no credentials)");
            return Ok(mock::lookup(path));
        }

        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, &url);
        for (name, value) in self.config.credentials.auth_headers() {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(classify_send_error)?;
        let status = response.status();
        tracing::debug!(%path, status = status.as_u16(), "Canva API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        // A body that is not JSON still came from a received response, so it
        // is passed through as a raw string value rather than misreported as
        // a transport failure.
        let text = response.text().await.map_err(|_| ApiError::NoResponse)?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        }
    }

    // --- Design operations ---

    pub async fn get_design(&self, design_id: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/designs/{design_id}"), None)
            .await
    }

    pub async fn list_designs(
        &self,
        limit: Option<u32>,
        start_after: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query = list_query(limit, start_after, None)?;
        self.request(Method::GET, &format!("/designs?{query}"), None)
            .await
    }

    // --- Brand operations ---

    pub async fn get_brand(&self, brand_id: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/brands/{brand_id}"), None)
            .await
    }

    pub async fn list_brands(
        &self,
        limit: Option<u32>,
        start_after: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query = list_query(limit, start_after, None)?;
        self.request(Method::GET, &format!("/brands?{query}"), None)
            .await
    }

    // --- Asset operations ---

    pub async fn get_asset(&self, asset_id: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/assets/{asset_id}"), None)
            .await
    }

    pub async fn list_assets(
        &self,
        limit: Option<u32>,
        start_after: Option<&str>,
        asset_type: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query = list_query(limit, start_after, asset_type)?;
        self.request(Method::GET, &format!("/assets?{query}"), None)
            .await
    }

    /// Submit an image by URL, with optional title and brand association.
    ///
    /// Absent optional fields are sent as explicit JSON nulls, matching the
    /// remote contract.
    pub async fn upload_image(
        &self,
        image_url: &str,
        title: Option<&str>,
        brand_id: Option<&str>,
    ) -> Result<Value, ApiError> {
        url::Url::parse(image_url)
            .map_err(|e| ApiError::RequestSetupFailed(format!("invalid image URL: {e}")))?;

        let body = json!({
            "url": image_url,
            "title": title,
            "brandId": brand_id,
        });
        self.request(Method::POST, "/assets/images", Some(body))
            .await
    }

    // --- User operations ---

    pub async fn get_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, &format!("/users/{user_id}"), None)
            .await
    }

    pub async fn list_users(
        &self,
        limit: Option<u32>,
        start_after: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query = list_query(limit, start_after, None)?;
        self.request(Method::GET, &format!("/users?{query}"), None)
            .await
    }
}

/// Build the query string for a listing operation.
///
/// `limit` defaults to 50 and must stay within 1..=100. Absent optional
/// parameters are omitted entirely, never encoded as empty values.
fn list_query(
    limit: Option<u32>,
    start_after: Option<&str>,
    asset_type: Option<&str>,
) -> Result<String, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if limit < 1 || limit > MAX_PAGE_LIMIT {
        return Err(ApiError::RequestSetupFailed(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
        )));
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("limit", &limit.to_string());
    if let Some(token) = start_after {
        query.append_pair("startAfter", token);
    }
    if let Some(ty) = asset_type {
        query.append_pair("type", ty);
    }
    Ok(query.finish())
}

/// Classify a transport-level failure from `reqwest`.
///
/// Builder failures (bad URL, unserializable body) never left the process;
/// everything else sent bytes but saw no response.
fn classify_send_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::RequestSetupFailed(err.to_string())
    } else {
        ApiError::NoResponse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_and_omits_absent_params() {
        assert_eq!(list_query(None, None, None).unwrap(), "limit=50");
        assert_eq!(
            list_query(Some(10), Some("tok"), None).unwrap(),
            "limit=10&startAfter=tok"
        );
        assert_eq!(
            list_query(Some(10), None, Some("IMAGE")).unwrap(),
            "limit=10&type=IMAGE"
        );
    }

    #[test]
    fn list_query_rejects_out_of_range_limit() {
        assert!(matches!(
            list_query(Some(0), None, None),
            Err(ApiError::RequestSetupFailed(_))
        ));
        assert!(matches!(
            list_query(Some(101), None, None),
            Err(ApiError::RequestSetupFailed(_))
        ));
        assert!(list_query(Some(1), None, None).is_ok());
        assert!(list_query(Some(100), None, None).is_ok());
    }

    #[test]
    fn error_display_matches_remote_contract() {
        let err = ApiError::RemoteRejected {
            status: 404,
            body: r#"{"error":"not found"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"Canva API Error: 404 - {"error":"not found"}"#
        );
        assert_eq!(
            ApiError::NoResponse.to_string(),
            "No response received from Canva API"
        );
    }
}
