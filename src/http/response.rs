//! Responses the dispatcher produces outside the handlers.
//!
//! # Design Decisions
//! - Every body is plain text
//! - Body read failures keep the framework's own status (413 over the limit, 400 otherwise)

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Body of every 404.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Response for a request no route matched.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Failure while handling a matched route.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] BytesRejection),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            DispatchError::BodyRead(rejection) => rejection.into_response(),
        }
    }
}
