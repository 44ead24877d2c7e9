//! Hosted backend (auth + data API) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project base URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anonymous API key, sent as the `apikey` header on every request.
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if the backend has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Data API root: `{url}/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base())
    }

    /// Auth API root: `{url}/auth/v1`.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base())
    }

    /// Reject URLs without an http(s) scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() || self.url.starts_with("https://") || self.url.starts_with("http://")
        {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "backend.url".into(),
            reason: format!("'{}' must start with http:// or https://", self.url),
        })
    }

    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = BackendConfig {
            url: "https://abcd.supabase.co".into(),
            anon_key: "anon".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn api_roots_trim_trailing_slash() {
        let config = BackendConfig {
            url: "https://abcd.supabase.co/".into(),
            ..Default::default()
        };
        assert_eq!(config.rest_url(), "https://abcd.supabase.co/rest/v1");
        assert_eq!(config.auth_url(), "https://abcd.supabase.co/auth/v1");
    }

    #[test]
    fn validate_rejects_missing_scheme() {
        let config = BackendConfig {
            url: "abcd.supabase.co".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend.url"));
    }

    #[test]
    fn validate_accepts_empty_and_http() {
        assert!(BackendConfig::default().validate().is_ok());
        let local = BackendConfig {
            url: "http://localhost:54321".into(),
            ..Default::default()
        };
        assert!(local.validate().is_ok());
    }
}
