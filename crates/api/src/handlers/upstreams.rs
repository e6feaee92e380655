use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use tracing::debug;

use crate::{
    dto::{AppJson, UpstreamDto, UpstreamRemovalDto},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upstreams", get(get_upstreams).put(register_upstream))
        .route("/upstreams/{upstream}", delete(delete_upstream))
}

async fn get_upstreams(State(state): State<AppState>) -> Json<Vec<UpstreamDto>> {
    let upstreams: Vec<UpstreamDto> = state
        .upstreams
        .get
        .execute()
        .into_iter()
        .map(UpstreamDto::from)
        .collect();
    debug!(count = upstreams.len(), "Upstreams retrieved");
    Json(upstreams)
}

async fn register_upstream(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpstreamDto>,
) -> Result<Json<UpstreamDto>, ApiError> {
    let upstream = state.upstreams.register.execute(&req.upstream)?;
    Ok(Json(UpstreamDto::from(upstream)))
}

async fn delete_upstream(
    State(state): State<AppState>,
    Path(upstream): Path<String>,
) -> Result<Json<UpstreamRemovalDto>, ApiError> {
    let removal = state.upstreams.delete.execute(&upstream)?;
    Ok(Json(UpstreamRemovalDto::from(removal)))
}
