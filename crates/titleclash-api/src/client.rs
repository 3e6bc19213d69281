//! TitleClash API client struct and the generic JSON request helper.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ApiConfig, ApiError};

/// TitleClash API client.
pub struct ApiClient {
    pub(crate) config: ApiConfig,
    pub(crate) http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("titleclash-agent/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one JSON request to `api_root + path`.
    ///
    /// `Content-Type: application/json` is always sent; `Authorization:
    /// Bearer` only when `token` is non-empty. A 2xx body is returned as
    /// parsed JSON (`null` when empty). Anything else becomes
    /// [`ApiError::Http`] carrying the body's `message` field, or the raw
    /// body when there is none.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.api_root(), path);
        debug!(%method, %url, authenticated = token.is_some(), "TitleClash API request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Parse(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let (message, error_code) = extract_error(&text);
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                message
            };
            warn!(%method, %url, status = status.as_u16(), "TitleClash API error: {message}");
            return Err(ApiError::Http {
                status_code: status.as_u16(),
                message,
                error_code,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Deserialize a JSON value returned by [`ApiClient::request`].
    pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Pull the human-readable message and machine error code out of an error
/// body. Falls back to the raw text when the body is not a JSON object with
/// a `message` field.
pub(crate) fn extract_error(body: &str) -> (String, Option<String>) {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return (body.trim().to_string(), None);
    };

    let error_code = map.get("error").and_then(Value::as_str).map(String::from);
    let message = match map.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => body.trim().to_string(),
    };
    (message, error_code)
}
