//! Problem listing.

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ApiClient, ApiError, ResourceId};

/// Lifecycle state of a problem on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemState {
    Draft,
    Open,
    Voting,
    Closed,
    Archived,
}

impl ProblemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemState::Draft => "draft",
            ProblemState::Open => "open",
            ProblemState::Voting => "voting",
            ProblemState::Closed => "closed",
            ProblemState::Archived => "archived",
        }
    }
}

impl fmt::Display for ProblemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image waiting for titles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Problem {
    pub id: ResourceId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub state: Option<ProblemState>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// One page of `GET /problems`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProblemPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Problem>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Problem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Problem>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiClient {
    /// List problems in the given state.
    pub async fn list_problems(&self, state: ProblemState) -> Result<ProblemPage, ApiError> {
        let path = format!("/problems?state={state}");
        let value = self.request(Method::GET, &path, None, None).await?;
        if value.is_null() {
            return Ok(ProblemPage::default());
        }
        let page: ProblemPage = Self::decode(value)?;
        debug!(%state, count = page.data.len(), "problems fetched");
        Ok(page)
    }

    /// Fetch all open problems. Empty when the server has none.
    pub async fn get_open_problems(&self) -> Result<Vec<Problem>, ApiError> {
        Ok(self.list_problems(ProblemState::Open).await?.data)
    }
}
