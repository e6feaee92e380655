use clap::Parser;
use origin_relay_api::AppState;
use origin_relay_domain::CliOverrides;
use origin_relay_jobs::{CacheSweepJob, JobRunner};
use std::sync::atomic::Ordering;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "origin-relay")]
#[command(version)]
#[command(about = "Origin Relay - DNS forwarder that routes queries by client address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Management API listen address (host:port or :port)
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// DNS listen address (host:port or :port)
    #[arg(long, value_name = "ADDR")]
    listen_dns: Option<String>,

    /// TTL written into forwarded answers, 0 keeps upstream TTLs
    #[arg(long, value_name = "SECS")]
    rewrite_ttl: Option<u32>,

    /// Response cache lifetime, 0 disables caching
    #[arg(long, value_name = "SECS")]
    cache_ttl: Option<u64>,

    /// Upstream exchange timeout
    #[arg(long, value_name = "SECS")]
    upstream_timeout: Option<u64>,

    /// Receive buffer for upstream replies, 0 uses the default
    #[arg(long, value_name = "BYTES")]
    udp_buffer: Option<u16>,

    /// Forward to routed upstreams even if they are not registered
    #[arg(long)]
    ignore_upstream_status: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            api_listen: cli.listen.clone(),
            dns_listen: cli.listen_dns.clone(),
            rewrite_ttl: cli.rewrite_ttl,
            cache_ttl: cli.cache_ttl,
            upstream_timeout: cli.upstream_timeout,
            udp_buffer: cli.udp_buffer,
            ignore_upstream_status: cli.ignore_upstream_status,
            log_level: cli.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), CliOverrides::from(&cli))?;

    bootstrap::init_logging(&config);

    info!("Starting Origin Relay v{}", env!("CARGO_PKG_VERSION"));

    let dns_addr = config.server.dns_socket_addr()?;
    let api_addr = config.server.api_socket_addr()?;

    let repos = di::Repositories::new();
    let dns_services = di::DnsServices::new(&config, &repos);

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(maintenance) = dns_services.cache_maintenance.clone() {
        runner = runner.with_cache_sweep(
            CacheSweepJob::new(maintenance).with_interval(config.dns.cache_sweep_interval),
        );
    }
    let job_handles = runner.start().await;

    let engine = dns_services.engine.clone();
    let dns_shutdown = shutdown.clone();
    let dns_task = tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, engine).await {
            error!(error = %e, "DNS server error");
        }
        dns_shutdown.cancel();
    });

    let app_state = AppState::new(repos.origins.clone(), repos.upstreams.clone());
    let web_shutdown = shutdown.clone();
    let web_task = tokio::spawn(async move {
        if let Err(e) = server::start_web_server(api_addr, app_state, web_shutdown.clone()).await
        {
            error!(error = %e, "Management API error");
        }
        web_shutdown.cancel();
    });

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
        _ = shutdown.cancelled() => {}
    }

    shutdown.cancel();
    dns_task.abort();

    if let Err(e) = web_task.await {
        error!(error = %e, "Management API task failed");
    }
    for handle in job_handles {
        let _ = handle.await;
    }

    if let Some(cache) = &dns_services.cache {
        let metrics = cache.metrics();
        info!(
            hits = metrics.hits.load(Ordering::Relaxed),
            misses = metrics.misses.load(Ordering::Relaxed),
            insertions = metrics.insertions.load(Ordering::Relaxed),
            expirations = metrics.expirations.load(Ordering::Relaxed),
            hit_rate = format!("{:.1}%", metrics.hit_rate()),
            "Response cache statistics"
        );
    }

    info!("Server shutdown complete");
    Ok(())
}
