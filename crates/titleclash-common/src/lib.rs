//! Shared building blocks for the TitleClash client binaries.
//!
//! Holds the error types every crate converts into and the helpers that
//! read settings from the process environment and `.env` files.

pub mod env;
pub mod errors;

pub use env::{load_dotenv, non_blank};
pub use errors::{ClashError, ConfigError};
