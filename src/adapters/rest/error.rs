use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::DomainError;

pub const INVALID_ZIPCODE: &str = "invalid zipcode";
pub const ZIPCODE_NOT_FOUND: &str = "can not find zipcode";
pub const WEATHER_API_ERROR: &str = "weather API error";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Status and client-visible message for a domain error.
pub fn status_and_message(e: &DomainError) -> (StatusCode, &'static str) {
    match e {
        DomainError::InvalidInput { .. } => (StatusCode::UNPROCESSABLE_ENTITY, INVALID_ZIPCODE),
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, ZIPCODE_NOT_FOUND),
        DomainError::UpstreamError { .. } => (StatusCode::FAILED_DEPENDENCY, WEATHER_API_ERROR),
        DomainError::UpstreamUnreachable { .. } | DomainError::UpstreamMalformedResponse { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
        }
    }
}

/// Map domain error to a plain-text response. The cause is logged, never returned.
pub fn domain_error_to_response(e: &DomainError) -> Response {
    match e {
        DomainError::InvalidInput { .. } | DomainError::NotFound(_) => {
            tracing::debug!(error = %e, "rejecting request")
        }
        DomainError::UpstreamError { .. } => tracing::warn!(error = %e, "upstream dependency failed"),
        DomainError::UpstreamUnreachable { .. } | DomainError::UpstreamMalformedResponse { .. } => {
            tracing::error!(error = %e, "internal error")
        }
    }
    let (status, message) = status_and_message(e);
    plain_text(status, message)
}

pub fn internal_error() -> Response {
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

fn plain_text(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{message}\n"),
    )
        .into_response()
}
