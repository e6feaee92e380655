use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest upstream receive buffer accepted when one is configured.
pub const MIN_UDP_BUFFER: u16 = 512;

/// Receive buffer used for upstream exchanges when `udp_buffer` is 0.
pub const DEFAULT_UDP_BUFFER: usize = 4096;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL written into every answer record (seconds, 0 = keep upstream TTLs)
    #[serde(default = "default_rewrite_ttl")]
    pub rewrite_ttl: u32,

    /// Lifetime of cached responses (seconds, 0 = caching disabled)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    /// Deadline for one upstream exchange (seconds)
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout: u64,

    /// Upstream receive buffer in bytes (0 = default)
    #[serde(default)]
    pub udp_buffer: u16,

    /// Forward even when the routed upstream was never registered online
    #[serde(default)]
    pub ignore_upstream_status: bool,

    /// How often expired cache entries are swept (seconds)
    #[serde(default = "default_cache_sweep_interval")]
    pub cache_sweep_interval: u64,
}

impl DnsConfig {
    pub fn cache_enabled(&self) -> bool {
        self.cache_ttl > 0
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn udp_buffer_size(&self) -> usize {
        match self.udp_buffer {
            0 => DEFAULT_UDP_BUFFER,
            n => n as usize,
        }
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            rewrite_ttl: default_rewrite_ttl(),
            cache_ttl: default_cache_ttl(),
            upstream_timeout: default_upstream_timeout(),
            udp_buffer: 0,
            ignore_upstream_status: false,
            cache_sweep_interval: default_cache_sweep_interval(),
        }
    }
}

fn default_rewrite_ttl() -> u32 {
    900
}

fn default_cache_ttl() -> u64 {
    900
}

fn default_upstream_timeout() -> u64 {
    10
}

fn default_cache_sweep_interval() -> u64 {
    60
}
