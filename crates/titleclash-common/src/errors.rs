use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("env file not readable: {0}")]
    EnvFile(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ClashError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error reported by the TitleClash API, already formatted for display.
    #[error("{0}")]
    Api(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("{0}")]
    Usage(String),
}
