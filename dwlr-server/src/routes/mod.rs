//! Request handlers.

pub mod chat;
pub mod status;

use crate::error::ApiError;

/// Fallback for unmatched `/api/*` paths and methods.
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound
}
