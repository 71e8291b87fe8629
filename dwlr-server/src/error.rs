/// Error responses of the HTTP API
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dwlr_core::chat::ErrorBody;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The completion API key is not configured
    #[error("OPENAI_API_KEY is not set. Add it in environment settings.")]
    MissingApiKey,

    /// The chat request body is not a non-empty message list
    #[error("Invalid request body. Expected {{ messages: ChatMessage[] }}.")]
    InvalidChatBody,

    /// The request body exceeds the size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The completion API failed or returned nothing
    #[error("Error processing your request")]
    Upstream { status: StatusCode, details: String },

    /// No API route matched
    #[error("API endpoint not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::InvalidChatBody => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let details = match self {
            ApiError::Upstream { details, .. } => Some(details.clone()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
