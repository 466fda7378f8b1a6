//! HTTP error handling and response types.
//!
//! Every client error is answered with `406 Not Acceptable` and a short
//! plain-text reason. Nothing here is retried.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::db::StoreError;

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The path carried no comic id.
    #[error("missing id")]
    MissingIdentifier,

    /// The id was never assigned, or its comic was deleted.
    #[error("id out of range")]
    IdentifierOutOfRange,

    /// No `Content-Length`, or a zero one. Carries the route's message.
    #[error("{0}")]
    EmptyBody(&'static str),

    /// The body did not decode, or decoded to a record that failed validation.
    #[error("invalid JSON")]
    MalformedPayload,

    /// Declared body length exceeds the configured limit.
    #[error("request body of {0} bytes exceeds limit")]
    PayloadTooLarge(usize),

    /// The connection failed or closed while the body was being read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// The id segment was not a digit string, so no route matches.
    #[error("not found")]
    RouteNotMatched,

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingIdentifier
            | AppError::IdentifierOutOfRange
            | AppError::EmptyBody(_)
            | AppError::MalformedPayload => StatusCode::NOT_ACCEPTABLE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::BodyRead(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotMatched => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain")],
            self.to_string(),
        )
            .into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        // Both cases look the same to the client.
        tracing::debug!("Store lookup failed: {}", err);
        match err {
            StoreError::Unassigned { .. } | StoreError::Deleted(_) => {
                AppError::IdentifierOutOfRange
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_not_acceptable() {
        for err in [
            AppError::MissingIdentifier,
            AppError::IdentifierOutOfRange,
            AppError::EmptyBody("empty body"),
            AppError::MalformedPayload,
        ] {
            assert_eq!(err.status(), StatusCode::NOT_ACCEPTABLE);
        }
        assert_eq!(AppError::RouteNotMatched.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::MissingIdentifier.to_string(), "missing id");
        assert_eq!(AppError::IdentifierOutOfRange.to_string(), "id out of range");
        assert_eq!(
            AppError::EmptyBody("empty request body").to_string(),
            "empty request body"
        );
        assert_eq!(AppError::MalformedPayload.to_string(), "invalid JSON");
    }

    #[test]
    fn test_store_errors_map_to_out_of_range() {
        let id = crate::models::ComicId::new(4);
        for store_err in [StoreError::Unassigned { id, len: 2 }, StoreError::Deleted(id)] {
            let err: AppError = store_err.into();
            assert!(matches!(err, AppError::IdentifierOutOfRange));
            assert_eq!(err.to_string(), "id out of range");
        }
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = AppError::MalformedPayload.into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
    }
}
