//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs that the rest of the
//! application consumes. They are built once by [`super::resolve`] and only
//! handed out by reference afterwards.

use std::time::Duration;

use serde::Serialize;

use super::keys;

// ── API ─────────────────────────────────────────────────────────────────────

/// Backend API endpoint and client-side rate-limit settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Scheme + host (+ port) of the backend, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Versioned path prefix, e.g. `/api/v1`.
    pub version: String,
    /// Requests allowed per window.
    pub rate_limit: u64,
    /// Window length in milliseconds.
    pub rate_limit_interval: u64,
}

impl ApiConfig {
    /// Base URL joined with the version prefix, without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        if version.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{version}")
        }
    }

    /// Full URL for `path` under [`Self::api_root`].
    pub fn endpoint(&self, path: &str) -> String {
        let root = self.api_root();
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            root
        } else {
            format!("{root}/{path}")
        }
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_millis(self.rate_limit_interval)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: keys::DEFAULT_API_BASE_URL.to_string(),
            version: keys::DEFAULT_API_VERSION.to_string(),
            rate_limit: keys::DEFAULT_API_RATE_LIMIT,
            rate_limit_interval: keys::DEFAULT_API_RATE_LIMIT_INTERVAL_MS,
        }
    }
}

// ── Auth ────────────────────────────────────────────────────────────────────

/// Auth token persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Name of the browser storage slot holding the auth token.
    pub token_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: keys::DEFAULT_AUTH_TOKEN_KEY.to_string(),
        }
    }
}

// ── Features ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub dark_mode: bool,
    pub debug_mode: bool,
}

// ── Top-level ───────────────────────────────────────────────────────────────

/// Fully-resolved deployment configuration.
///
/// `Default` yields the value produced from an empty environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub features: FeatureFlags,
}

impl ResolvedConfig {
    /// Pretty JSON in the shape the frontend bundle expects
    /// (`api.baseUrl`, `auth.tokenKey`, `features.darkMode`, …).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str, version: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            version: version.into(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn api_root_joins_segments() {
        assert_eq!(
            ApiConfig::default().api_root(),
            "http://localhost:8000/api/v1"
        );
        assert_eq!(
            api("https://docs.example.com/", "api/v2/").api_root(),
            "https://docs.example.com/api/v2"
        );
    }

    #[test]
    fn api_root_without_version() {
        assert_eq!(api("http://h:1/", "/").api_root(), "http://h:1");
    }

    #[test]
    fn endpoint_appends_path() {
        let a = ApiConfig::default();
        assert_eq!(
            a.endpoint("/documents"),
            "http://localhost:8000/api/v1/documents"
        );
        assert_eq!(a.endpoint("chat/42"), "http://localhost:8000/api/v1/chat/42");
        assert_eq!(a.endpoint(""), "http://localhost:8000/api/v1");
    }

    #[test]
    fn rate_limit_window_is_millis() {
        assert_eq!(
            ApiConfig::default().rate_limit_window(),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn json_uses_camel_case() {
        let json = ResolvedConfig::default().to_json_pretty().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["api"]["baseUrl"], "http://localhost:8000");
        assert_eq!(v["api"]["rateLimitInterval"], 60000);
        assert_eq!(v["auth"]["tokenKey"], "documind_auth_token");
        assert_eq!(v["features"]["darkMode"], false);
        assert_eq!(v["features"]["debugMode"], false);
    }
}
