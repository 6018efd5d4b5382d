//! Server configuration.
//!
//! Loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,

    /// Allow any origin (permissive CORS)
    pub enable_cors: bool,

    /// Emit log lines as JSON
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("RECEIPT_POINTS_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_POINTS_ADDR".to_string()))?;

        Ok(ServerConfig {
            addr,
            enable_cors: parse_flag(&lookup, "RECEIPT_POINTS_CORS")?,
            log_json: parse_flag(&lookup, "RECEIPT_POINTS_LOG_JSON")?,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(false),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            enable_cors: false,
            log_json: false,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
