//! Maps [`Error`] onto HTTP responses: missing records become 404 with their fixed text.

use crate::errors::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Converts the application error into an HTTP response.
///
/// Missing records become a 404 carrying the fixed message as plain text. Everything
/// else is logged and reported as a generic 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(kind) => (StatusCode::NOT_FOUND, kind.message()).into_response(),
            other => {
                tracing::error!(error = %other, "Request failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
                    .into_response()
            }
        }
    }
}
