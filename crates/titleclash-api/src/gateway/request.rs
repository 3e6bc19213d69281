//! `sessions_spawn` request payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_AGENT_ID: &str = "main";
pub const DEFAULT_MODEL: &str = "openai/gpt-5.2";
pub const DEFAULT_THINKING: &str = "Running long research with high-quality model";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 600;

/// Body of `POST /api/sessions_spawn`.
///
/// `run_timeout_seconds` is a hint for the gateway; nothing enforces it
/// on this side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnRequest {
    pub task: String,
    pub label: String,
    pub agent_id: String,
    pub model: String,
    pub thinking: String,
    pub run_timeout_seconds: u64,
}

impl SpawnRequest {
    pub fn new(task: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            label: label.into(),
            agent_id: DEFAULT_AGENT_ID.to_string(),
            model: DEFAULT_MODEL.to_string(),
            thinking: DEFAULT_THINKING.to_string(),
            run_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Long-running research session about `topic`, labelled with the
    /// current UTC time.
    pub fn research(topic: &str) -> Self {
        Self::new(research_task(topic), research_label(Utc::now()))
    }

    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_thinking(mut self, thinking: impl Into<String>) -> Self {
        self.thinking = thinking.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.run_timeout_seconds = seconds;
        self
    }
}

pub fn research_task(topic: &str) -> String {
    format!("long_research: summarize latest news on {topic}")
}

pub fn research_label(at: DateTime<Utc>) -> String {
    format!("research-{}", at.format("%Y%m%d%H%M%S"))
}
