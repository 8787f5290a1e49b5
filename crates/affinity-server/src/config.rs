//! Server configuration types

use std::net::SocketAddr;

use crate::error::{Error, Result};

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Max port retries when the requested port is occupied.
pub const MAX_PORT_RETRIES: u16 = 10;

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindTarget {
    /// Exact address; no retry on conflict
    Address(SocketAddr),
    /// Port on all interfaces; retried upwards when in use
    Port(u16),
}

/// Runtime configuration resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: BindTarget,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Resolve CLI values. `address` overrides `port` when given.
    pub fn new(
        port: u16,
        address: Option<&str>,
        log_level: &str,
        max_body_bytes: usize,
    ) -> Result<Self> {
        let bind = match address {
            Some(address) => BindTarget::Address(address.parse().map_err(|e| {
                Error::Config(format!("failed to parse address '{}': {}", address, e))
            })?),
            None => BindTarget::Port(port),
        };

        if max_body_bytes == 0 {
            return Err(Error::Config("max body size must be non-zero".to_string()));
        }

        Ok(Self {
            bind,
            log_level: normalize_log_level(log_level).to_string(),
            max_body_bytes,
        })
    }
}

/// Unknown levels fall back to info.
fn normalize_log_level(level: &str) -> &'static str {
    match level {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}
