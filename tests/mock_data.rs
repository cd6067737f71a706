//! Property tests for the placeholder data provider.
//!
//! The provider must be total, pure, and deterministic: classification
//! depends only on the path shape, and item payloads carry fixed mock ids
//! regardless of the requested identifier.

use mcp_canva_server::mock;

const COLLECTIONS: [&str; 4] = ["designs", "brands", "assets", "users"];

#[test]
fn listing_shape_ignores_query_string() {
    for collection in COLLECTIONS {
        let bare = mock::lookup(&format!("/{collection}"));
        let with_query = mock::lookup(&format!("/{collection}?limit=5&startAfter=abc"));
        assert_eq!(
            bare, with_query,
            "query string must not change the {collection} listing payload"
        );
        assert_eq!(
            bare["nextPageToken"], "mock-next-page-token",
            "{collection} listing must carry the constant continuation token"
        );
        assert_eq!(
            bare[collection].as_array().map(Vec::len),
            Some(2),
            "{collection} listing must hold exactly two elements"
        );
    }
}

#[test]
fn item_shape_for_any_id() {
    for collection in COLLECTIONS {
        for id in ["a", "mock-design-id", "0f3c/../x", "日本語"] {
            let item = mock::lookup(&format!("/{collection}/{id}"));
            assert!(
                item.get("id").is_some(),
                "{collection} item payload must have an id"
            );
            assert!(
                item.get("nextPageToken").is_none(),
                "{collection} item payload must not look like a listing"
            );
        }
    }
}

// The requested id is discarded on purpose: placeholder items always carry
// the fixed mock id. Demo behavior inherited from the remote-less mode, kept
// deliberately — do not "fix" this by echoing the requested id.
#[test]
fn placeholder_item_discards_requested_id() {
    let design = mock::lookup("/designs/a-very-specific-id");
    assert_eq!(design["id"], "mock-design-id");

    let brand = mock::lookup("/brands/another-id");
    assert_eq!(brand["id"], "mock-brand-id");

    let asset = mock::lookup("/assets/yet-another");
    assert_eq!(asset["id"], "mock-asset-id");

    let user = mock::lookup("/users/someone");
    assert_eq!(user["id"], "mock-user-id");
}

#[test]
fn lookup_is_deterministic() {
    for path in ["/designs", "/designs/x", "/users?limit=3", "/nothing"] {
        assert_eq!(mock::lookup(path), mock::lookup(path));
    }
}

#[test]
fn unknown_paths_yield_generic_payload() {
    for path in ["/folders", "/", "", "/designsx", "/v2/designs"] {
        let v = mock::lookup(path);
        assert_eq!(v["message"], "Mock data not available for this endpoint");
    }
}

#[test]
fn fixed_timestamps_not_clock_reads() {
    let design = mock::lookup("/designs/x");
    assert_eq!(design["createdAt"], "2023-01-01T00:00:00Z");
    assert_eq!(design["updatedAt"], "2023-01-02T00:00:00Z");
}
