use crate::errors::error_body;
use axum::{http::StatusCode, response::Response};
use std::any::Any;
use tracing::error;

/// Converts a handler panic into the standard 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Handler panicked");
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
