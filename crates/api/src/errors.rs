use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use origin_relay_domain::DomainError;
use serde_json::json;
use tracing::error;

pub enum ApiError {
    Domain(DomainError),
    /// Request body could not be decoded.
    Body(StatusCode, String),
    NotFound,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::Body(status, rejection.body_text())
    }
}

pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(err) => {
                let status = match &err {
                    DomainError::OriginNotFound(_) | DomainError::UpstreamNotFound(_) => {
                        StatusCode::NOT_FOUND
                    }

                    DomainError::InvalidIpAddress(_)
                    | DomainError::InvalidUpstream(_)
                    | DomainError::MalformedMessage(_) => StatusCode::BAD_REQUEST,

                    _ => {
                        error!(error = %err, "Unexpected error in management API");
                        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
                    }
                };
                error_body(status, err.to_string())
            }
            ApiError::Body(status, message) => error_body(status, message),
            ApiError::NotFound => error_body(StatusCode::NOT_FOUND, "404 page not found"),
        }
    }
}
