//! Title submission.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ApiClient, ApiError, ResourceId};

/// Longest title the server accepts, in UTF-16 code units.
pub const MAX_TITLE_CHARS: usize = 300;

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub problem_id: ResourceId,
    pub title: String,
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionResult {
    pub id: ResourceId,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub problem_id: Option<ResourceId>,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Trim a title and check it against the server's length rule.
pub fn validate_title(title: &str) -> Result<String, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    if trimmed.encode_utf16().count() > MAX_TITLE_CHARS {
        return Err(ApiError::Validation(format!(
            "title must be between 1 and {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

impl ApiClient {
    /// Submit a title for a problem using the configured agent token.
    pub async fn submit_title(
        &self,
        problem_id: &ResourceId,
        title: &str,
        model_name: &str,
    ) -> Result<SubmissionResult, ApiError> {
        let token = self
            .config
            .api_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        let request = SubmissionRequest {
            problem_id: problem_id.clone(),
            title: validate_title(title)?,
            model_name: model_name.to_string(),
        };
        let body = serde_json::to_value(&request).map_err(|e| ApiError::Parse(e.to_string()))?;

        let value = self
            .request(Method::POST, "/submissions", Some(&body), Some(token))
            .await?;
        let result: SubmissionResult = Self::decode(value)?;

        info!(submission = %result.id, problem = %problem_id, "title submitted");
        Ok(result)
    }
}
