use super::response_parser::{ParsedResponse, ResponseParser};
use crate::dns::cache::fingerprint;
use crate::dns::wire::{self, opcode, rcode};
use bytes::Bytes;
use hickory_proto::op::Message;
use origin_relay_application::ports::{
    OriginRepository, ResponseCachePort, UpstreamRegistry, UpstreamTransport,
};
use origin_relay_domain::config::DnsConfig;
use origin_relay_domain::{canonicalize, Address, DomainError, Fingerprint, UpstreamEndpoint};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, field, info, instrument, trace, warn, Span};

/// Per-query knobs taken from `[dns]` configuration.
#[derive(Debug, Clone)]
pub struct ForwardingSettings {
    /// TTL written into every answer record; 0 leaves upstream TTLs untouched.
    pub rewrite_ttl: u32,
    pub upstream_timeout: Duration,
    /// Forward to routed upstreams even when they are not registered online.
    pub ignore_upstream_status: bool,
}

impl Default for ForwardingSettings {
    fn default() -> Self {
        Self::from(&DnsConfig::default())
    }
}

impl From<&DnsConfig> for ForwardingSettings {
    fn from(config: &DnsConfig) -> Self {
        Self {
            rewrite_ttl: config.rewrite_ttl,
            upstream_timeout: config.upstream_timeout_duration(),
            ignore_upstream_status: config.ignore_upstream_status,
        }
    }
}

/// Answers one inbound datagram: route by origin, serve from cache or
/// forward, and always produce a reply for anything that carries a header.
pub struct ForwardingEngine {
    origins: Arc<dyn OriginRepository>,
    upstreams: Arc<dyn UpstreamRegistry>,
    transport: Arc<dyn UpstreamTransport>,
    cache: Option<Arc<dyn ResponseCachePort>>,
    settings: ForwardingSettings,
}

impl ForwardingEngine {
    pub fn new(
        origins: Arc<dyn OriginRepository>,
        upstreams: Arc<dyn UpstreamRegistry>,
        transport: Arc<dyn UpstreamTransport>,
    ) -> Self {
        Self {
            origins,
            upstreams,
            transport,
            cache: None,
            settings: ForwardingSettings::default(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_settings(mut self, settings: ForwardingSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ForwardingSettings {
        &self.settings
    }

    /// Returns the reply datagram, or `None` when the input is too short to
    /// be answered at all.
    #[instrument(
        name = "dns_query",
        skip_all,
        fields(client = %src, id = field::Empty, origin = field::Empty, upstream = field::Empty)
    )]
    pub async fn handle(&self, query: &[u8], src: SocketAddr) -> Option<Vec<u8>> {
        if query.len() < wire::HEADER_LEN {
            debug!(len = query.len(), "Dropping datagram shorter than a DNS header");
            return None;
        }
        Span::current().record("id", wire::message_id(query).unwrap_or_default());
        trace!(packet = ?query, "Inbound query");

        let message = match Message::from_vec(query) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Unparsable query");
                return wire::build_error_reply(query, rcode::FORM_ERR);
            }
        };

        let origin = canonicalize(&src.to_string());
        if origin.is_zero() {
            warn!("Remote address did not canonicalize; refusing to route");
            return wire::build_error_reply(query, rcode::SERV_FAIL);
        }
        Span::current().record("origin", field::display(origin));

        let upstream = match self.resolve_upstream(&origin) {
            Ok(upstream) => upstream,
            Err(e) => {
                warn!(error = %e, "Query rejected");
                return wire::build_error_reply(query, rcode::SERV_FAIL);
            }
        };
        Span::current().record("upstream", field::display(upstream));

        let op = wire::opcode(query).unwrap_or_default();
        if op != opcode::QUERY && op != opcode::IQUERY {
            warn!(error = %DomainError::UnsupportedOpcode(op), "Query rejected");
            return wire::build_error_reply(query, rcode::NOT_IMP);
        }

        let key = fingerprint(&upstream, message.queries());

        if let Some(cached) = self.cached_response(&key) {
            debug!(fingerprint = %key, "Cache hit");
            return Some(self.finish_reply(cached, query));
        }

        match self.forward(upstream, query).await {
            Ok((response, parsed)) => {
                if let Some(cache) = &self.cache {
                    if parsed.is_success() {
                        cache.put(key, Bytes::copy_from_slice(&response));
                    }
                }
                Some(self.finish_reply(response, query))
            }
            Err(e) if e.is_transport_error() => {
                warn!(error = %e, "Upstream exchange failed");
                wire::build_error_reply(query, rcode::SERV_FAIL)
            }
            Err(e) => {
                warn!(error = %e, "Upstream reply rejected");
                wire::build_error_reply(query, rcode::SERV_FAIL)
            }
        }
    }

    fn resolve_upstream(&self, origin: &Address) -> Result<UpstreamEndpoint, DomainError> {
        let upstream = self
            .origins
            .get(origin)
            .ok_or_else(|| DomainError::NoRoute(origin.to_string()))?;

        if !self.settings.ignore_upstream_status && !self.upstreams.is_online(&upstream) {
            return Err(DomainError::UpstreamOffline(upstream.to_string()));
        }
        Ok(upstream)
    }

    fn cached_response(&self, key: &Fingerprint) -> Option<Vec<u8>> {
        let packed = self.cache.as_ref()?.get(key)?;

        if wire::question_end(&packed).is_none() {
            warn!(
                error = %DomainError::CacheCodec(format!("{} byte entry", packed.len())),
                "Ignoring undecodable cache entry"
            );
            return None;
        }
        Some(packed.to_vec())
    }

    async fn forward(
        &self,
        upstream: UpstreamEndpoint,
        query: &[u8],
    ) -> Result<(Vec<u8>, ParsedResponse), DomainError> {
        let stripped = wire::strip_client_subnet(query);
        if stripped.is_some() {
            debug!("Removed EDNS client subnet before forwarding");
        }
        let outbound = stripped.as_deref().unwrap_or(query);

        let start = Instant::now();
        let response = self
            .transport
            .exchange(upstream, outbound, self.settings.upstream_timeout)
            .await?;

        let parsed = ResponseParser::parse(&response)?;
        info!(
            rcode = %parsed.response_code,
            answers = parsed.answer_ttls.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Forwarded"
        );

        Ok((response, parsed))
    }

    fn finish_reply(&self, mut response: Vec<u8>, query: &[u8]) -> Vec<u8> {
        wire::prepare_reply(&mut response, query);

        if self.settings.rewrite_ttl > 0
            && wire::rewrite_answer_ttls(&mut response, self.settings.rewrite_ttl).is_none()
        {
            warn!("Answer section could not be walked; TTLs left as received");
        }

        trace!(packet = ?response, "Outbound reply");
        response
    }
}
