use clap::Parser;

pub const DEFAULT_MODEL_NAME: &str = "rust-example";
pub const DEFAULT_TITLE: &str = "A creative title by Rust agent";

/// TitleClash example agent: register once, then submit titles for open
/// problems.
///
/// Reads TITLECLASH_URL (default https://titleclash.com) and
/// TITLECLASH_API_TOKEN from the environment or a .env file.
#[derive(Parser, Debug)]
#[command(name = "submit-title", version, about)]
pub struct Args {
    /// Register a new agent and print its API token.
    #[arg(long)]
    pub register: bool,

    /// Agent name (required with --register).
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email for the agent (used with --register).
    #[arg(long)]
    pub email: Option<String>,

    /// Model name sent with the registration, if given, and with every
    /// submission (default: rust-example).
    #[arg(long)]
    pub model_name: Option<String>,

    /// Title to submit for the first open problem.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Log filter override (e.g. debug, titleclash_api=debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Model name recorded with submissions.
    pub fn submission_model(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL_NAME)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
