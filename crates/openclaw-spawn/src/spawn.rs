use std::io::Write;

use titleclash_api::gateway::research_task;
use titleclash_api::{GatewayClient, GatewayConfig, SpawnRequest};
use titleclash_common::{ClashError, ConfigError};

use crate::Args;

pub const MISSING_TOKEN_HINT: &str = "Set OPENCLAW_GATEWAY_TOKEN in env before running";

/// Gateway settings, with a missing token reported as the usage hint.
pub fn load_config<F>(lookup: F) -> Result<GatewayConfig, ClashError>
where
    F: Fn(&str) -> Option<String>,
{
    GatewayConfig::from_lookup(lookup).map_err(|e| match e {
        ConfigError::MissingVar(_) => ClashError::Usage(MISSING_TOKEN_HINT.to_string()),
        other => other.into(),
    })
}

pub fn build_request(args: &Args) -> SpawnRequest {
    let mut request = SpawnRequest::research(&args.topic)
        .with_agent_id(&args.agent_id)
        .with_model(&args.model)
        .with_thinking(&args.thinking)
        .with_timeout_seconds(args.timeout_seconds);

    request.task = args
        .task
        .clone()
        .unwrap_or_else(|| research_task(&args.topic));
    if let Some(label) = &args.label {
        request.label = label.clone();
    }
    request
}

/// Send one spawn request and print the gateway's status and raw body.
pub async fn run<W: Write>(
    args: &Args,
    client: &GatewayClient,
    out: &mut W,
) -> Result<(), ClashError> {
    let request = build_request(args);

    writeln!(out, "Spawning session -> {}", client.config().spawn_url())?;
    let response = client
        .spawn_session(&request)
        .await
        .map_err(|e| ClashError::Gateway(e.to_string()))?;

    if !response.is_success() {
        tracing::warn!(status = response.status, "gateway rejected spawn request");
    }
    writeln!(out, "{}", response.status)?;
    writeln!(out, "{}", response.body)?;
    Ok(())
}
