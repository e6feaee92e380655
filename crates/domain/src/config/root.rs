use serde::{Deserialize, Serialize};

use super::dns::{DnsConfig, MIN_UDP_BUFFER};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "origin-relay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/origin-relay/config.toml";

/// Main configuration structure for Origin Relay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen addresses for the DNS and management servers
    #[serde(default)]
    pub server: ServerConfig,

    /// Forwarding behaviour (TTL rewrite, caching, upstream exchange)
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. origin-relay.toml in current directory
    /// 3. /etc/origin-relay/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.api_listen {
            self.server.api_listen = listen;
        }
        if let Some(listen) = overrides.dns_listen {
            self.server.dns_listen = listen;
        }
        if let Some(ttl) = overrides.rewrite_ttl {
            self.dns.rewrite_ttl = ttl;
        }
        if let Some(ttl) = overrides.cache_ttl {
            self.dns.cache_ttl = ttl;
        }
        if let Some(timeout) = overrides.upstream_timeout {
            self.dns.upstream_timeout = timeout;
        }
        if let Some(size) = overrides.udp_buffer {
            self.dns.udp_buffer = size;
        }
        if overrides.ignore_upstream_status {
            self.dns.ignore_upstream_status = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.api_socket_addr()?;
        self.server.dns_socket_addr()?;

        if self.dns.upstream_timeout == 0 {
            return Err(ConfigError::Validation(
                "upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.dns.udp_buffer != 0 && self.dns.udp_buffer < MIN_UDP_BUFFER {
            return Err(ConfigError::Validation(format!(
                "udp buffer must be 0 or at least {} bytes",
                MIN_UDP_BUFFER
            )));
        }

        if self.dns.cache_enabled() && self.dns.cache_sweep_interval == 0 {
            return Err(ConfigError::Validation(
                "cache sweep interval cannot be 0 while caching is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_listen: Option<String>,
    pub dns_listen: Option<String>,
    pub rewrite_ttl: Option<u32>,
    pub cache_ttl: Option<u64>,
    pub upstream_timeout: Option<u64>,
    pub udp_buffer: Option<u16>,
    pub ignore_upstream_status: bool,
    pub log_level: Option<String>,
}
