//! Deterministic placeholder payloads served when API credentials are absent.
//!
//! Lookup is total and pure: no I/O, no randomness, no clock reads. The same
//! path shape always yields byte-identical JSON. The requested identifier is
//! discarded — single-item payloads always carry the fixed mock id.

use serde_json::{json, Value};

/// The four remote collections with placeholder coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Designs,
    Brands,
    Assets,
    Users,
}

impl Collection {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "designs" => Some(Self::Designs),
            "brands" => Some(Self::Brands),
            "assets" => Some(Self::Assets),
            "users" => Some(Self::Users),
            _ => None,
        }
    }
}

/// Coarse classification of a request path for placeholder lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    /// `/designs/{id}` and the like — a single object fetch.
    Item(Collection),
    /// `/designs`, `/designs?limit=10` — a collection listing.
    Listing(Collection),
    /// Anything else; no placeholder is defined.
    Unknown,
}

/// Classify a request path.
///
/// The first path segment selects the collection; a further non-empty segment
/// makes it a single-item fetch. The query string is ignored.
pub fn classify(path: &str) -> PathShape {
    let without_query = path.split('?').next().unwrap_or("");
    let mut segments = without_query.split('/').filter(|s| !s.is_empty());

    let Some(collection) = segments.next().and_then(Collection::from_segment) else {
        return PathShape::Unknown;
    };

    match segments.next() {
        Some(_) => PathShape::Item(collection),
        None => PathShape::Listing(collection),
    }
}

/// Placeholder payload for a request path.
pub fn lookup(path: &str) -> Value {
    match classify(path) {
        PathShape::Item(Collection::Designs) => json!({
            "id": "mock-design-id",
            "title": "Mock Design",
            "createdAt": "2023-01-01T00:00:00Z",
            "updatedAt": "2023-01-02T00:00:00Z",
            "thumbnailUrl": "https://example.com/thumbnail.jpg",
            "status": "PUBLISHED"
        }),
        PathShape::Listing(Collection::Designs) => json!({
            "designs": [
                {
                    "id": "mock-design-id-1",
                    "title": "Mock Design 1",
                    "createdAt": "2023-01-01T00:00:00Z"
                },
                {
                    "id": "mock-design-id-2",
                    "title": "Mock Design 2",
                    "createdAt": "2023-01-02T00:00:00Z"
                }
            ],
            "nextPageToken": "mock-next-page-token"
        }),
        PathShape::Item(Collection::Brands) => json!({
            "id": "mock-brand-id",
            "name": "Mock Brand",
            "createdAt": "2023-01-01T00:00:00Z",
            "updatedAt": "2023-01-02T00:00:00Z"
        }),
        PathShape::Listing(Collection::Brands) => json!({
            "brands": [
                {
                    "id": "mock-brand-id-1",
                    "name": "Mock Brand 1",
                    "createdAt": "2023-01-01T00:00:00Z"
                },
                {
                    "id": "mock-brand-id-2",
                    "name": "Mock Brand 2",
                    "createdAt": "2023-01-02T00:00:00Z"
                }
            ],
            "nextPageToken": "mock-next-page-token"
        }),
        PathShape::Item(Collection::Assets) => json!({
            "id": "mock-asset-id",
            "title": "Mock Asset",
            "type": "IMAGE",
            "createdAt": "2023-01-01T00:00:00Z",
            "url": "https://example.com/asset.jpg"
        }),
        PathShape::Listing(Collection::Assets) => json!({
            "assets": [
                {
                    "id": "mock-asset-id-1",
                    "title": "Mock Asset 1",
                    "type": "IMAGE",
                    "createdAt": "2023-01-01T00:00:00Z"
                },
                {
                    "id": "mock-asset-id-2",
                    "title": "Mock Asset 2",
                    "type": "VIDEO",
                    "createdAt": "2023-01-02T00:00:00Z"
                }
            ],
            "nextPageToken": "mock-next-page-token"
        }),
        PathShape::Item(Collection::Users) => json!({
            "id": "mock-user-id",
            "name": "Mock User",
            "email": "user@example.com",
            "role": "MEMBER"
        }),
        PathShape::Listing(Collection::Users) => json!({
            "users": [
                {
                    "id": "mock-user-id-1",
                    "name": "Mock User 1",
                    "email": "user1@example.com"
                },
                {
                    "id": "mock-user-id-2",
                    "name": "Mock User 2",
                    "email": "user2@example.com"
                }
            ],
            "nextPageToken": "mock-next-page-token"
        }),
        PathShape::Unknown => json!({
            "message": "Mock data not available for this endpoint"
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_item_vs_listing() {
        assert_eq!(classify("/designs/abc"), PathShape::Item(Collection::Designs));
        assert_eq!(classify("/designs"), PathShape::Listing(Collection::Designs));
        assert_eq!(
            classify("/designs?limit=50"),
            PathShape::Listing(Collection::Designs)
        );
        assert_eq!(classify("/users/u-1"), PathShape::Item(Collection::Users));
        assert_eq!(classify("/folders"), PathShape::Unknown);
        assert_eq!(classify(""), PathShape::Unknown);
    }

    #[test]
    fn upload_path_counts_as_asset_item() {
        // `/assets/images` has a second segment, so it classifies as a
        // single-asset payload. Matches the original substring-based lookup.
        assert_eq!(
            classify("/assets/images"),
            PathShape::Item(Collection::Assets)
        );
    }

    #[test]
    fn unknown_path_yields_generic_message() {
        let v = lookup("/unknown/thing");
        assert_eq!(
            v["message"],
            "Mock data not available for this endpoint"
        );
    }
}
