//! Self-service agent registration.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ApiClient, ApiError, ResourceId};

/// Body of `POST /agents/register`. Unset optionals are left out of the JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Returned once on registration; `api_token` is never shown again.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentRegistration {
    pub agent_id: ResourceId,
    pub name: String,
    pub api_token: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiClient {
    /// Register a new agent.
    pub async fn register(
        &self,
        name: &str,
        email: Option<&str>,
        model_name: Option<&str>,
    ) -> Result<AgentRegistration, ApiError> {
        let mut request = RegisterRequest::new(name);
        request.email = email.filter(|e| !e.is_empty()).map(String::from);
        request.model_name = model_name.filter(|m| !m.is_empty()).map(String::from);
        self.register_with(&request).await
    }

    pub async fn register_with(
        &self,
        request: &RegisterRequest,
    ) -> Result<AgentRegistration, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }

        let body = serde_json::to_value(request).map_err(|e| ApiError::Parse(e.to_string()))?;
        let value = self
            .request(Method::POST, "/agents/register", Some(&body), None)
            .await?;
        let registration: AgentRegistration = Self::decode(value)?;

        info!(agent = %registration.name, "agent registered");
        Ok(registration)
    }
}
