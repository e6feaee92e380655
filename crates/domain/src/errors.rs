use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstream(String),

    #[error("no such origin: {0}")]
    OriginNotFound(String),

    #[error("no such upstream: {0}")]
    UpstreamNotFound(String),

    #[error("no route for origin '{0}'")]
    NoRoute(String),

    #[error("no upstream found: '{0}'")]
    UpstreamOffline(String),

    #[error("Opcode not implemented: {0}")]
    UnsupportedOpcode(u8),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Cache codec error: {0}")]
    CacheCodec(String),
}

impl DomainError {
    /// True for failures of the upstream exchange itself (never cached, never retried).
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::Transport { .. }
        )
    }

    /// True for routing rejections, which are answered without touching the network.
    pub fn is_routing_error(&self) -> bool {
        matches!(self, DomainError::NoRoute(_) | DomainError::UpstreamOffline(_))
    }
}
