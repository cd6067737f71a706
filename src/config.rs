/// Default Canva REST API base URL.
const DEFAULT_BASE_URL: &str = "https://api.canva.com/v1";

/// API credentials resolved once at startup.
///
/// Both secrets are optional: a missing credential is not a startup failure,
/// it switches the server into placeholder mode. Partial configuration (one
/// secret present, one absent) is treated identically to absent.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: Option<String>,
    pub api_key: Option<String>,
}

impl Credentials {
    /// Load credentials from `CANVA_APP_ID` and `CANVA_API_KEY`.
    ///
    /// Emits a one-time warning when unconfigured. This is the only place
    /// such a warning originates.
    pub fn from_env() -> Self {
        let creds = Self {
            app_id: std::env::var("CANVA_APP_ID").ok().filter(|s| !s.is_empty()),
            api_key: std::env::var("CANVA_API_KEY").ok().filter(|s| !s.is_empty()),
        };
        if !creds.is_configured() {
            tracing::warn!(
                "Canva API credentials not found in environment variables; using mock data"
            );
        }
        creds
    }

    /// True only when both secrets are present.
    pub fn is_configured(&self) -> bool {
        self.app_id.is_some() && self.api_key.is_some()
    }

    /// Headers attached to every authenticated request.
    ///
    /// Valid only when `is_configured()`; the dispatcher never reaches this
    /// path in placeholder mode.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Authorization",
                format!("Bearer {}", self.api_key.as_deref().unwrap_or_default()),
            ),
            (
                "X-Canva-App-Id",
                self.app_id.as_deref().unwrap_or_default().to_string(),
            ),
            ("Content-Type", "application/json".to_string()),
        ]
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub credentials: Credentials,
    pub base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CANVA_APP_ID` (optional) — application identifier
    /// - `CANVA_API_KEY` (optional) — API key
    /// - `CANVA_BASE_URL` (optional, default `https://api.canva.com/v1`)
    ///
    /// Missing credentials never fail startup; they enable placeholder mode.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CANVA_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            credentials: Credentials::from_env(),
            base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_credentials_are_unconfigured() {
        let creds = Credentials {
            app_id: Some("app".into()),
            api_key: None,
        };
        assert!(!creds.is_configured());

        let creds = Credentials {
            app_id: None,
            api_key: Some("key".into()),
        };
        assert!(!creds.is_configured());
    }

    #[test]
    fn auth_headers_carry_both_secrets() {
        let creds = Credentials {
            app_id: Some("my-app".into()),
            api_key: Some("secret".into()),
        };
        let headers = creds.auth_headers();
        assert!(headers.contains(&("Authorization", "Bearer secret".to_string())));
        assert!(headers.contains(&("X-Canva-App-Id", "my-app".to_string())));
        assert!(headers.contains(&("Content-Type", "application/json".to_string())));
    }
}
