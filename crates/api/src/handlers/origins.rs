use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use tracing::debug;

use crate::{
    dto::{AppJson, OriginDto},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/origins", get(get_origins).put(upsert_origin))
        .route("/origins/{origin}", delete(delete_origin))
}

async fn get_origins(State(state): State<AppState>) -> Json<Vec<OriginDto>> {
    let origins: Vec<OriginDto> = state
        .origins
        .get
        .execute()
        .into_iter()
        .map(OriginDto::from)
        .collect();
    debug!(count = origins.len(), "Origins retrieved");
    Json(origins)
}

async fn upsert_origin(
    State(state): State<AppState>,
    AppJson(req): AppJson<OriginDto>,
) -> Result<Json<OriginDto>, ApiError> {
    let entry = state.origins.upsert.execute(&req.ip, &req.upstream)?;
    Ok(Json(OriginDto::from(entry)))
}

async fn delete_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<Json<OriginDto>, ApiError> {
    let removed = state.origins.delete.execute(&origin)?;
    Ok(Json(OriginDto::from(removed)))
}
