//! OpenClaw gateway client.
//!
//! Spawns isolated agent sessions through the gateway's `sessions_spawn`
//! RPC. The call is fire-and-forget: the response status and body are
//! handed back untouched, without schema validation.

mod client;
mod config;
mod request;

pub use client::{GatewayClient, SpawnResponse};
pub use config::GatewayConfig;
pub use request::{
    research_label, research_task, SpawnRequest, DEFAULT_AGENT_ID, DEFAULT_MODEL,
    DEFAULT_THINKING, DEFAULT_TIMEOUT_SECONDS,
};
