use axum::{extract::Request, ServiceExt};
use origin_relay_api::{create_app, AppState};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing::info;

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api/v1", bind_addr),
        "Starting management API"
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(create_app(state));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    Ok(())
}
