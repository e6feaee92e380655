pub mod health;
pub mod origins;
pub mod upstreams;

pub use health::health_check;

use crate::errors::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
