use crate::handlers;
use crate::middleware::{handle_panic, propagate_request_id, REQUEST_ID_HEADER};
use crate::state::AppState;
use axum::{body::Body, http::Request, middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

/// Management routes, mounted under `/api/v1`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::origins::routes())
        .merge(handlers::upstreams::routes())
        .with_state(state)
}

/// Full management application: API, health probe, JSON 404s and the
/// request-id/trace/panic middleware stack.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", create_api_routes(state))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(&REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(middleware::from_fn(propagate_request_id))
}
