use origin_relay_domain::RoutingEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginDto {
    pub ip: String,
    pub upstream: String,
}

impl From<RoutingEntry> for OriginDto {
    fn from(entry: RoutingEntry) -> Self {
        Self {
            ip: entry.origin.to_string(),
            upstream: entry.upstream.to_string(),
        }
    }
}
