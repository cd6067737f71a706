//! Static documentation served through the `canva://{section}` resource.

/// Valid documentation section names, in the order they are listed back to
/// callers who ask for an unknown section.
pub const SECTIONS: [&str; 7] = [
    "overview",
    "getting-started",
    "authentication",
    "designs",
    "brands",
    "assets",
    "users",
];

/// Documentation text for a section, if the section exists.
pub fn section(name: &str) -> Option<&'static str> {
    match name {
        "overview" => Some(OVERVIEW),
        "getting-started" => Some(GETTING_STARTED),
        "authentication" => Some(AUTHENTICATION),
        "designs" => Some(DESIGNS),
        "brands" => Some(BRANDS),
        "assets" => Some(ASSETS),
        "users" => Some(USERS),
        _ => None,
    }
}

/// Render a section, or a document listing valid sections when unknown.
pub fn render(name: &str) -> String {
    match section(name) {
        Some(text) => text.to_string(),
        None => format!(
            "Documentation section '{name}' not found. Available sections: {}",
            SECTIONS.join(", ")
        ),
    }
}

const OVERVIEW: &str = r#"# Canva API Overview

The Canva API allows you to programmatically interact with Canva's platform. You can manage designs, brands, assets, and users.

## Key Concepts

- **Designs**: Canva documents that can be created, edited, and published
- **Brands**: Collections of design assets and settings that maintain brand consistency
- **Assets**: Images, videos, fonts, and other media used in designs
- **Users**: People who have access to your Canva content

## Authentication

All API requests require authentication using an API key. See the authentication section for details."#;

const GETTING_STARTED: &str = r#"# Getting Started with Canva API

To start using the Canva API:

1. Create a Canva developer account at https://www.canva.dev/
2. Register your application to get an App ID and API key
3. Use these credentials in your API requests

## Making Your First Request

All API requests should include:
- `Authorization` header with your API key
- `X-Canva-App-Id` header with your App ID
- `Content-Type: application/json` for POST requests"#;

const AUTHENTICATION: &str = r#"# Authentication

The Canva API uses API keys for authentication. Include your API key in the Authorization header of all requests:

```
Authorization: Bearer YOUR_API_KEY
```

Also include your App ID in the X-Canva-App-Id header:

```
X-Canva-App-Id: YOUR_APP_ID
```

Keep your API key secure and never expose it in client-side code."#;

const DESIGNS: &str = r#"# Designs API

The Designs API allows you to manage Canva designs.

## Endpoints

- GET /v1/designs - List designs
- GET /v1/designs/{designId} - Get a specific design
- POST /v1/designs - Create a new design
- PUT /v1/designs/{designId} - Update a design
- DELETE /v1/designs/{designId} - Delete a design

## Design Object

A design object includes:
- id: Unique identifier
- title: Design title
- createdAt: Creation timestamp
- updatedAt: Last update timestamp
- thumbnailUrl: URL to design thumbnail
- status: DRAFT or PUBLISHED"#;

const BRANDS: &str = r#"# Brands API

The Brands API allows you to manage brand kits in Canva.

## Endpoints

- GET /v1/brands - List brands
- GET /v1/brands/{brandId} - Get a specific brand
- POST /v1/brands - Create a new brand
- PUT /v1/brands/{brandId} - Update a brand
- DELETE /v1/brands/{brandId} - Delete a brand

## Brand Object

A brand object includes:
- id: Unique identifier
- name: Brand name
- createdAt: Creation timestamp
- updatedAt: Last update timestamp
- colors: Brand colors
- fonts: Brand fonts
- logoUrl: URL to brand logo"#;

const ASSETS: &str = r#"# Assets API

The Assets API allows you to manage design assets like images, videos, and fonts.

## Endpoints

- GET /v1/assets - List assets
- GET /v1/assets/{assetId} - Get a specific asset
- POST /v1/assets/images - Upload an image
- POST /v1/assets/videos - Upload a video
- POST /v1/assets/fonts - Upload a font
- DELETE /v1/assets/{assetId} - Delete an asset

## Asset Object

An asset object includes:
- id: Unique identifier
- title: Asset title
- type: IMAGE, VIDEO, AUDIO, or FONT
- createdAt: Creation timestamp
- url: URL to access the asset
- brandId: Associated brand (if any)"#;

const USERS: &str = r#"# Users API

The Users API allows you to manage users who have access to your Canva content.

## Endpoints

- GET /v1/users - List users
- GET /v1/users/{userId} - Get a specific user
- POST /v1/users - Invite a new user
- PUT /v1/users/{userId} - Update a user's permissions
- DELETE /v1/users/{userId} - Remove a user

## User Object

A user object includes:
- id: Unique identifier
- name: User's name
- email: User's email address
- role: User's role (ADMIN, MEMBER, etc.)
- createdAt: When the user was added"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_section_resolves() {
        for name in SECTIONS {
            assert!(section(name).is_some(), "missing section {name}");
        }
    }

    #[test]
    fn unknown_section_lists_valid_names() {
        let doc = render("billing");
        assert!(doc.contains("'billing' not found"));
        for name in SECTIONS {
            assert!(doc.contains(name));
        }
    }
}
