//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the listen address.
pub const BIND_ADDRESS_ENV: &str = "BIND_ADDRESS";

/// Listen address used when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9090";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddress { var: &'static str, value: String },
}

/// Server configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_address: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ADDRESS_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let bind_address = raw.trim().parse().map_err(|_| ConfigError::InvalidAddress {
            var: BIND_ADDRESS_ENV,
            value: raw.clone(),
        })?;

        Ok(Self { bind_address })
    }
}
