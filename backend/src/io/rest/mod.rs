//! # REST API Interface Layer
//!
//! HTTP endpoints for the diet journal. This layer handles:
//! - Session cookie extraction and refresh
//! - JSON request/response serialization
//! - Error translation from domain kinds to HTTP status codes
//!
//! ## Design Principles
//!
//! - **Domain Separation**: pure translation layer without business logic
//! - **Error Transparency**: typed domain kinds map to stable status codes;
//!   storage causes are logged here and never leaked to the client
//! - **Single session step**: the session token is ensured exactly once per
//!   request, before any domain call

pub mod mappers;
pub mod meal_apis;
pub mod metrics_apis;
pub mod session;
pub mod user_apis;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domain::DomainError;

/// Status code for a domain error kind
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) | DomainError::NoLinkedUser => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translate a domain error into an HTTP response.
///
/// Storage failures are logged with their cause but surface as an opaque
/// internal error; every other kind is safe to echo to the client.
pub(crate) fn error_response(context: &str, err: DomainError) -> Response {
    match &err {
        DomainError::Storage(cause) => {
            error!("{context}: {cause:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
        _ => {
            error!("{context}: {err}");
            (status_for(&err), err.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&DomainError::NoLinkedUser), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&DomainError::NotFound("meal")), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&DomainError::Storage(anyhow!("db gone"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
