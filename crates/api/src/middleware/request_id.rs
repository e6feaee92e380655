use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Ensures every request carries an `x-request-id` and echoes it on the response.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let id = match request.headers().get(&REQUEST_ID_HEADER) {
        Some(value) => value.clone(),
        None => {
            let generated = HeaderValue::from_str(&generate_request_id())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            request
                .headers_mut()
                .insert(REQUEST_ID_HEADER, generated.clone());
            generated
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, id);
    response
}

fn generate_request_id() -> String {
    format!("{:016x}", fastrand::u64(..))
}
