//! sessions-spawn: start an isolated OpenClaw session for a long research
//! task through the gateway's `sessions_spawn` RPC.
//!
//! Needs `OPENCLAW_GATEWAY_TOKEN`; `OPENCLAW_GATEWAY` defaults to the local
//! gateway. Prints the gateway's status code and raw body.

mod spawn;

use std::process::ExitCode;

use clap::Parser;
use titleclash_api::gateway::{
    DEFAULT_AGENT_ID, DEFAULT_MODEL, DEFAULT_THINKING, DEFAULT_TIMEOUT_SECONDS,
};
use titleclash_api::GatewayClient;
use titleclash_common::ClashError;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sessions-spawn", version, about = "Spawn an OpenClaw research session")]
pub struct Args {
    /// Research topic substituted into the default task.
    #[arg(long, default_value = "<topic>")]
    pub topic: String,

    /// Full task text; overrides --topic.
    #[arg(long)]
    pub task: Option<String>,

    /// Session label (default: research-<UTC timestamp>).
    #[arg(long)]
    pub label: Option<String>,

    #[arg(long, default_value = DEFAULT_AGENT_ID)]
    pub agent_id: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_THINKING)]
    pub thinking: String,

    /// Server-side run timeout hint, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Log filter override (e.g. debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> Result<(), ClashError> {
    let config = spawn::load_config(|key| std::env::var(key).ok())?;
    let client = GatewayClient::new(config)?;

    let stdout = std::io::stdout();
    spawn::run(args, &client, &mut stdout.lock()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    titleclash_common::load_dotenv();

    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
