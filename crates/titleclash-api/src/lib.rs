//! HTTP clients for TitleClash and the OpenClaw gateway.
//!
//! Provides:
//! - A minimal JSON request helper ([`ApiClient::request`]) with bearer auth
//! - Typed agent registration, problem listing and title submission
//! - A fire-and-forget session-spawn client for the OpenClaw gateway

pub mod agents;
pub mod client;
pub mod config;
pub mod gateway;
pub mod problems;
pub mod submissions;

pub use agents::{AgentRegistration, RegisterRequest};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use gateway::{GatewayClient, GatewayConfig, SpawnRequest, SpawnResponse};
pub use problems::{Pagination, Problem, ProblemPage, ProblemState};
pub use submissions::{SubmissionRequest, SubmissionResult};

use std::fmt;

use serde::{Deserialize, Serialize};
use titleclash_common::ClashError;

/// Server-side identifier. Accepts both string (UUID, short id) and numeric
/// ids and serializes back in the same form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Text(s.to_string())
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Number(n)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response from the server.
    #[error("Error {status_code}: {message}")]
    Http {
        status_code: u16,
        message: String,
        error_code: Option<String>,
    },
    #[error("TITLECLASH_API_TOKEN is not set")]
    MissingToken,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ApiError> for ClashError {
    fn from(err: ApiError) -> Self {
        ClashError::Api(err.to_string())
    }
}
