use super::OriginDto;
use origin_relay_application::use_cases::UpstreamRemoval;
use origin_relay_domain::UpstreamEndpoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamDto {
    pub upstream: String,
}

impl From<UpstreamEndpoint> for UpstreamDto {
    fn from(upstream: UpstreamEndpoint) -> Self {
        Self {
            upstream: upstream.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamRemovalDto {
    pub upstream: String,
    /// Whether the upstream was in the registry.
    pub registered: bool,
    /// Routes dropped because they targeted this upstream.
    pub removed_origins: Vec<OriginDto>,
}

impl From<UpstreamRemoval> for UpstreamRemovalDto {
    fn from(removal: UpstreamRemoval) -> Self {
        Self {
            upstream: removal.upstream.to_string(),
            registered: removal.registered,
            removed_origins: removal
                .removed_origins
                .into_iter()
                .map(OriginDto::from)
                .collect(),
        }
    }
}
