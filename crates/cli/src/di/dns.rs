use super::Repositories;
use origin_relay_application::ports::{CacheMaintenancePort, ResponseCachePort};
use origin_relay_domain::Config;
use origin_relay_infrastructure::dns::{
    ForwardingEngine, ForwardingSettings, ResponseCache, ResponseCacheMaintenance,
    UdpUpstreamTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub engine: Arc<ForwardingEngine>,
    pub cache: Option<Arc<ResponseCache>>,
    pub cache_maintenance: Option<Arc<dyn CacheMaintenancePort>>,
}

impl DnsServices {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let transport = Arc::new(UdpUpstreamTransport::new(config.dns.udp_buffer_size()));
        let settings = ForwardingSettings::from(&config.dns);

        info!(
            rewrite_ttl = settings.rewrite_ttl,
            upstream_timeout_secs = config.dns.upstream_timeout,
            udp_buffer = transport.recv_buffer(),
            ignore_upstream_status = settings.ignore_upstream_status,
            "Initializing forwarding engine"
        );

        let mut engine = ForwardingEngine::new(
            repos.origins.clone(),
            repos.upstreams.clone(),
            transport,
        )
        .with_settings(settings);

        let mut cache = None;
        let mut cache_maintenance: Option<Arc<dyn CacheMaintenancePort>> = None;

        if config.dns.cache_enabled() {
            let response_cache = Arc::new(ResponseCache::new(config.dns.cache_ttl_duration()));
            let port: Arc<dyn ResponseCachePort> = response_cache.clone();
            engine = engine.with_cache(port.clone());
            cache_maintenance = Some(Arc::new(ResponseCacheMaintenance::new(port)));
            cache = Some(response_cache);
        } else {
            info!("Response cache disabled");
        }

        Self {
            engine: Arc::new(engine),
            cache,
            cache_maintenance,
        }
    }
}
