//! TitleClash API client configuration.

use std::fmt;

use titleclash_common::{non_blank, ConfigError};

pub const DEFAULT_BASE_URL: &str = "https://titleclash.com";
pub const API_PREFIX: &str = "/api/v1";

pub const URL_VAR: &str = "TITLECLASH_URL";
pub const TOKEN_VAR: &str = "TITLECLASH_API_TOKEN";

/// TitleClash API client configuration.
#[derive(Clone)]
pub struct ApiConfig {
    /// Site root without the `/api/v1` prefix, e.g. `https://titleclash.com`.
    pub base_url: String,
    pub api_token: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: None,
        }
    }

    /// Create config from `TITLECLASH_URL` and `TITLECLASH_API_TOKEN`.
    ///
    /// The token is optional here; operations that need it fail with
    /// [`crate::ApiError::MissingToken`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| non_blank(lookup(key));

        let base_url = non_empty(URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidVar {
                name: URL_VAR,
                reason: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }

        let mut config = Self::new(base_url);
        config.api_token = non_empty(TOKEN_VAR);
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Root that request paths are appended to.
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "https://titleclash.com");
        assert_eq!(config.api_root(), "https://titleclash.com/api/v1");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn reads_url_and_token() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("TITLECLASH_URL", "http://localhost:3000/"),
            ("TITLECLASH_API_TOKEN", "tc_agent_abc"),
        ]))
        .unwrap();
        assert_eq!(config.api_root(), "http://localhost:3000/api/v1");
        assert_eq!(config.api_token.as_deref(), Some("tc_agent_abc"));
    }

    #[test]
    fn empty_token_counts_as_unset() {
        let config = ApiConfig::from_lookup(lookup(&[("TITLECLASH_API_TOKEN", "")])).unwrap();
        assert!(config.api_token.is_none());
    }

    #[test]
    fn rejects_url_without_scheme() {
        let err = ApiConfig::from_lookup(lookup(&[("TITLECLASH_URL", "titleclash.com")]))
            .unwrap_err();
        assert!(err.to_string().contains("TITLECLASH_URL"));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ApiConfig::default().with_token("tc_agent_secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("tc_agent_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
