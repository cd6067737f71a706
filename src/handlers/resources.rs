//! Resource renderers: fetched objects formatted as markdown documents.
//!
//! Renderers are a failure boundary. A dispatch error becomes a one-line
//! `Error retrieving <kind>: <message>` document, never a propagated error.
//! Every object field is treated as optional with a stated fallback.

use serde_json::{json, Value};

use crate::client::CanvaClient;
use crate::docs;
use crate::protocol::{JsonRpcError, ResourceResult};

/// `resources/templates/list` payload: the four URI templates.
pub fn templates() -> Value {
    json!({
        "resourceTemplates": [
            {
                "uriTemplate": "canva://{section}",
                "name": "canva_docs",
                "description": "Canva API documentation by section",
                "mimeType": "text/markdown"
            },
            {
                "uriTemplate": "canva://design/{designId}",
                "name": "canva_design",
                "description": "A Canva design rendered as markdown",
                "mimeType": "text/markdown"
            },
            {
                "uriTemplate": "canva://brand/{brandId}",
                "name": "canva_brand",
                "description": "A Canva brand rendered as markdown",
                "mimeType": "text/markdown"
            },
            {
                "uriTemplate": "canva://asset/{assetId}",
                "name": "canva_asset",
                "description": "A Canva asset rendered as markdown",
                "mimeType": "text/markdown"
            }
        ]
    })
}

/// Resolve a `canva://` URI to a text document.
///
/// Malformed URIs are the only protocol-level failure; remote failures are
/// absorbed into the rendered document.
pub async fn read(uri: &str, client: &CanvaClient) -> Result<ResourceResult, JsonRpcError> {
    let Some(rest) = uri.strip_prefix("canva://") else {
        return Err(JsonRpcError::invalid_params(format!(
            "Unsupported resource URI: {uri}"
        )));
    };

    let text = match rest.split_once('/') {
        Some(("design", design_id)) if !design_id.is_empty() => {
            design_document(client, design_id).await
        }
        Some(("brand", brand_id)) if !brand_id.is_empty() => {
            brand_document(client, brand_id).await
        }
        Some(("asset", asset_id)) if !asset_id.is_empty() => {
            asset_document(client, asset_id).await
        }
        Some(_) => {
            return Err(JsonRpcError::invalid_params(format!(
                "Unsupported resource URI: {uri}"
            )));
        }
        None => docs::render(rest),
    };

    Ok(ResourceResult::text(uri, text))
}

/// String field with a fallback when absent or non-string.
fn field<'a>(obj: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or(fallback)
}

async fn design_document(client: &CanvaClient, design_id: &str) -> String {
    let design = match client.get_design(design_id).await {
        Ok(v) => v,
        Err(e) => return format!("Error retrieving design: {e}"),
    };

    let thumbnail = match design.get("thumbnailUrl").and_then(Value::as_str) {
        Some(url) => format!("![Thumbnail]({url})"),
        None => "No thumbnail available".to_string(),
    };

    format!(
        "# Design: {title}\n\n\
         ID: {id}\n\
         Created: {created}\n\
         Updated: {updated}\n\
         Status: {status}\n\n\
         {thumbnail}\n\n\
         ## Actions\n\
         - View in Canva: https://www.canva.com/design/{design_id}\n\
         - Edit design metadata using the `update_design` tool\n\
         - Delete this design using the `delete_design` tool",
        title = field(&design, "title", "Untitled"),
        id = field(&design, "id", "Unknown"),
        created = field(&design, "createdAt", "Unknown"),
        updated = field(&design, "updatedAt", "Unknown"),
        status = field(&design, "status", "Unknown"),
    )
}

async fn brand_document(client: &CanvaClient, brand_id: &str) -> String {
    let brand = match client.get_brand(brand_id).await {
        Ok(v) => v,
        Err(e) => return format!("Error retrieving brand: {e}"),
    };

    let logo = match brand.get("logoUrl").and_then(Value::as_str) {
        Some(url) => format!("![Logo]({url})"),
        None => "No logo available".to_string(),
    };

    let colors = match brand.get("colors").and_then(Value::as_array) {
        Some(colors) if !colors.is_empty() => colors
            .iter()
            .map(|c| {
                format!(
                    "- {}: {}",
                    field(c, "name", "Unnamed"),
                    field(c, "value", "Unknown")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "No colors defined".to_string(),
    };

    let fonts = match brand.get("fonts").and_then(Value::as_array) {
        Some(fonts) if !fonts.is_empty() => fonts
            .iter()
            .map(|f| {
                format!(
                    "- {}: {}",
                    field(f, "name", "Unnamed"),
                    field(f, "type", "Unknown")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "No fonts defined".to_string(),
    };

    format!(
        "# Brand: {name}\n\n\
         ID: {id}\n\
         Created: {created}\n\
         Updated: {updated}\n\n\
         {logo}\n\n\
         ## Brand Colors\n\
         {colors}\n\n\
         ## Brand Fonts\n\
         {fonts}\n\n\
         ## Actions\n\
         - View brand assets using the `list_assets` tool with this brandId\n\
         - Update brand using the `update_brand` tool\n\
         - Delete this brand using the `delete_brand` tool",
        name = field(&brand, "name", "Untitled"),
        id = field(&brand, "id", "Unknown"),
        created = field(&brand, "createdAt", "Unknown"),
        updated = field(&brand, "updatedAt", "Unknown"),
    )
}

async fn asset_document(client: &CanvaClient, asset_id: &str) -> String {
    let asset = match client.get_asset(asset_id).await {
        Ok(v) => v,
        Err(e) => return format!("Error retrieving asset: {e}"),
    };

    let brand_line = match asset.get("brandId").and_then(Value::as_str) {
        Some(brand_id) => format!("Brand ID: {brand_id}"),
        None => "Not associated with a brand".to_string(),
    };

    let url = asset.get("url").and_then(Value::as_str);
    let asset_type = field(&asset, "type", "Unknown");

    // Inline image markup only for image assets with a URL.
    let mut body = String::new();
    if asset_type == "IMAGE" {
        if let Some(url) = url {
            body.push_str(&format!("![Asset]({url})\n"));
        }
    }
    match url {
        Some(url) => body.push_str(&format!("URL: {url}")),
        None => body.push_str("No URL available"),
    }

    format!(
        "# Asset: {title}\n\n\
         ID: {id}\n\
         Type: {asset_type}\n\
         Created: {created}\n\
         {brand_line}\n\n\
         {body}\n\n\
         ## Actions\n\
         - Use this asset in designs\n\
         - Delete this asset using the `delete_asset` tool",
        title = field(&asset, "title", "Untitled"),
        id = field(&asset, "id", "Unknown"),
        created = field(&asset, "createdAt", "Unknown"),
    )
}
