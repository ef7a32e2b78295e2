use std::env::VarError;
use std::net::{Ipv4Addr, SocketAddr};

use crate::app_config::{KrogerConfig, ServerConfig};
use crate::ConfigError;

const DEFAULT_TIMEOUT_SECS: &str = "180";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Load the Kroger API settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a required env var is missing or a value is invalid.
pub fn load_kroger_config() -> Result<KrogerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_kroger_config_from_env()
}

/// Load the Kroger API settings from variables already in the process.
fn load_kroger_config_from_env() -> Result<KrogerConfig, ConfigError> {
    build_kroger_config(&env_lookup)
}

/// Load the full server configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a required env var is missing or a value is invalid.
pub fn load_server_config() -> Result<ServerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_server_config_from_env()
}

/// Unlike [`load_server_config`], this does NOT load `.env` files.
fn load_server_config_from_env() -> Result<ServerConfig, ConfigError> {
    build_server_config(&env_lookup)
}

/// Log filter directive from `GROCERY_LOG_LEVEL`, defaulting to `info`.
#[must_use]
pub fn log_level() -> String {
    or_default(&env_lookup, "GROCERY_LOG_LEVEL", DEFAULT_LOG_LEVEL)
}

fn env_lookup(key: &str) -> Result<String, VarError> {
    std::env::var(key)
}

/// Empty values count as unset so that `FOO=` in a `.env` file still fails fast.
fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn or_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn build_kroger_config<F>(lookup: &F) -> Result<KrogerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let base_url = require(lookup, "KROGER_API_BASE_URL")?;
    let client_id = require(lookup, "KROGER_API_CLIENT_ID")?;
    let client_secret = require(lookup, "KROGER_API_CLIENT_SECRET")?;
    let chain = require(lookup, "KROGER_API_CHAIN")?;

    let raw_timeout = or_default(lookup, "KROGER_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
    let timeout_secs = raw_timeout
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "KROGER_API_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(KrogerConfig {
        base_url,
        client_id,
        client_secret,
        chain,
        timeout_secs,
    })
}

fn build_server_config<F>(lookup: &F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let port = require(lookup, "PORT")?
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })?;
    let kroger = build_kroger_config(lookup)?;
    let app_url = require(lookup, "GROCERY_DATA_APP_URL")?;
    let log_level = or_default(lookup, "GROCERY_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    Ok(ServerConfig {
        bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        app_url,
        log_level,
        kroger,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
