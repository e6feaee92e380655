use crate::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Address and port of a resolver queries are forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UpstreamEndpoint(SocketAddr);

impl UpstreamEndpoint {
    pub fn new(addr: SocketAddr) -> Self {
        Self(addr)
    }

    /// Parses `host:port` (`[v6]:port` for IPv6). Host names are rejected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        SocketAddr::from_str(raw.trim())
            .map(Self)
            .map_err(|e| DomainError::InvalidUpstream(format!("{}: {}", raw, e)))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.0
    }
}

impl From<SocketAddr> for UpstreamEndpoint {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl FromStr for UpstreamEndpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
