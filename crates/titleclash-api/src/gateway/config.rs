//! Gateway connection settings.

use std::fmt;

use titleclash_common::{non_blank, ConfigError};

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:18789";

pub const GATEWAY_VAR: &str = "OPENCLAW_GATEWAY";
pub const GATEWAY_TOKEN_VAR: &str = "OPENCLAW_GATEWAY_TOKEN";

#[derive(Clone)]
pub struct GatewayConfig {
    pub url: String,
    pub token: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Create config from `OPENCLAW_GATEWAY` and `OPENCLAW_GATEWAY_TOKEN`.
    /// The token is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| non_blank(lookup(key));

        let token = non_empty(GATEWAY_TOKEN_VAR).ok_or(ConfigError::MissingVar(GATEWAY_TOKEN_VAR))?;
        let url = non_empty(GATEWAY_VAR).unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        Ok(Self::new(url, token))
    }

    pub fn spawn_url(&self) -> String {
        format!("{}/api/sessions_spawn", self.url)
    }
}
