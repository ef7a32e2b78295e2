//! Shared configuration for the grocery-data binaries.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{KrogerConfig, ServerConfig};
pub use config::{load_kroger_config, load_server_config, log_level};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
