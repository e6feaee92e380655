use crate::DomainError;
use std::fmt;
use std::net::IpAddr;

/// Canonical IP address of a query origin.
///
/// IPv4-mapped IPv6 addresses are always stored as plain IPv4 so that the
/// management API and the DNS listener agree on the key regardless of which
/// socket family delivered the datagram. The zero value (`Address::default()`)
/// holds no IP and never matches a routing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Option<IpAddr>);

impl Address {
    pub fn from_ip(ip: IpAddr) -> Self {
        let ip = match ip {
            IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(IpAddr::V6(v6)),
            v4 => v4,
        };
        Self(Some(ip))
    }

    /// Strict parse used by the management API: the input must be a bare IP literal.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.trim()
            .parse::<IpAddr>()
            .map(Self::from_ip)
            .map_err(|e| DomainError::InvalidIpAddress(format!("{}: {}", raw, e)))
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self::from_ip(ip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ip) => write!(f, "{}", ip),
            None => f.write_str("invalid IP"),
        }
    }
}

/// Normalizes a transport-layer remote address (`ip`, `ip:port`, `[ipv6]` or
/// `[ipv6]:port`) into a canonical [`Address`].
///
/// Never fails: unparsable input yields the zero `Address`, which the
/// forwarding engine rejects as "no route".
pub fn canonicalize(raw: &str) -> Address {
    strip_port(raw.trim())
        .parse::<IpAddr>()
        .map(Address::from_ip)
        .unwrap_or_default()
}

fn strip_port(raw: &str) -> &str {
    if let Some(rest) = raw.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => &rest[..end],
            None => raw,
        };
    }

    // A bare IPv6 literal has no port; splitting it at the last ':' would
    // cut off its final group.
    if raw.parse::<IpAddr>().is_ok() {
        return raw;
    }

    match raw.rfind(':') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}
