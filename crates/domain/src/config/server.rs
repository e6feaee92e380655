use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Management API listen address (`host:port` or `:port`)
    #[serde(default = "default_api_listen")]
    pub api_listen: String,

    /// DNS (UDP) listen address (`host:port` or `:port`)
    #[serde(default = "default_dns_listen")]
    pub dns_listen: String,
}

impl ServerConfig {
    pub fn api_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.api_listen)
    }

    pub fn dns_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.dns_listen)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_listen: default_api_listen(),
            dns_listen: default_dns_listen(),
        }
    }
}

/// Parses a listen address; the bare `:port` form binds every IPv4 interface.
pub fn parse_listen_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    let raw = raw.trim();
    let candidate = if raw.starts_with(':') {
        format!("0.0.0.0{}", raw)
    } else {
        raw.to_string()
    };
    candidate
        .parse()
        .map_err(|e| ConfigError::Validation(format!("invalid listen address '{}': {}", raw, e)))
}

fn default_api_listen() -> String {
    ":10080".to_string()
}

fn default_dns_listen() -> String {
    ":10053".to_string()
}
