//! submit-title: example TitleClash agent.
//!
//! `submit-title --register --name <n> [--email <e>]` registers an agent and
//! prints its token. Without `--register` it submits a title for the first
//! open problem using `TITLECLASH_API_TOKEN`. Every failure exits with 1.

mod cli;
mod flow;

use std::process::ExitCode;

use titleclash_api::{ApiClient, ApiConfig};
use titleclash_common::ClashError;
use tracing_subscriber::EnvFilter;

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

async fn run(args: &cli::Args) -> Result<(), ClashError> {
    let config = ApiConfig::from_env()?;
    tracing::debug!(?config, "TitleClash config");
    let client = ApiClient::new(config)?;

    let stdout = std::io::stdout();
    flow::run(args, &client, &mut stdout.lock()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    titleclash_common::load_dotenv();

    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
