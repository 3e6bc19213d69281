//! Gateway HTTP client.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::{GatewayConfig, SpawnRequest};
use crate::ApiError;

/// Raw gateway reply. The gateway's response format is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnResponse {
    pub status: u16,
    pub body: String,
}

impl SpawnResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct GatewayClient {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("openclaw-spawn/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// POST the spawn request once. Any HTTP status is returned as-is;
    /// only transport failures are errors.
    pub async fn spawn_session(&self, request: &SpawnRequest) -> Result<SpawnResponse, ApiError> {
        let url = self.config.spawn_url();
        let body = serde_json::to_vec(request).map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!(%url, label = %request.label, model = %request.model, "sessions_spawn request");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!(status, bytes = body.len(), "sessions_spawn response");
        Ok(SpawnResponse { status, body })
    }
}
