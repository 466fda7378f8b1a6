//! HTTP handlers for the comic resource.
//!
//! Each handler follows the same shape: validate the identifier
//! synchronously, await the body if there is one, decode and validate it,
//! and only then touch the store. The store lock is taken inside the store
//! call and released before the response is built.

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::models::{Comic, ComicId};
use crate::validation;

/// Result type for handlers.
pub type HandlerResult<T> = Result<T, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        slots: state.store.len(),
        comics: state.store.live_count(),
        started_at: state.started_at.to_rfc3339(),
    })
}

// =============================================================================
// Comic CRUD
// =============================================================================

/// GET /comic/{id}
///
/// Returns the comic as JSON, or 406 if the id was never assigned or the
/// comic was deleted.
pub async fn get_comic(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Response> {
    let id = parse_comic_id(&raw_id)?;
    let comic = state.store.get(id)?;
    let body = state
        .codec
        .encode(&comic)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// DELETE /comic/{id}
///
/// Soft-deletes the comic. Any assigned index may be deleted, including one
/// that is already deleted.
pub async fn delete_comic(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<StatusCode> {
    let id = parse_comic_id(&raw_id)?;
    state.store.soft_delete(id)?;
    tracing::info!("Deleted comic {}", id);
    Ok(StatusCode::OK)
}

/// PUT /comic/{id}
///
/// Replaces a live comic with the record in the request body.
pub async fn update_comic(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Request,
) -> HandlerResult<StatusCode> {
    let id = parse_comic_id(&raw_id)?;
    if !state.store.contains(id) {
        return Err(AppError::IdentifierOutOfRange);
    }

    let body = read_body(&state, request, "empty request body").await?;
    let comic = decode_valid(&state, &body)?;

    // Re-checked under the write lock: the body fetch above may have
    // suspended this task.
    state.store.replace(id, comic)?;
    tracing::info!("Updated comic {}", id);
    Ok(StatusCode::OK)
}

/// POST /comic, PUT /comic
///
/// Appends the record in the request body as a new comic.
pub async fn create_comic(State(state): State<AppState>, request: Request) -> HandlerResult<StatusCode> {
    let body = read_body(&state, request, "empty body").await?;
    let comic = decode_valid(&state, &body)?;

    let id = state.store.append(comic);
    tracing::info!("Created comic {}", id);
    Ok(StatusCode::OK)
}

/// GET|PUT|DELETE /comic/
///
/// The id segment is present in the path pattern but empty.
pub async fn missing_id() -> AppError {
    AppError::MissingIdentifier
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse the `{id}` path segment.
///
/// Only digit strings name a comic; anything else is treated as a path that
/// matches no route. A digit string too large to be an index cannot have
/// been assigned, so it is out of range.
pub fn parse_comic_id(raw: &str) -> HandlerResult<ComicId> {
    if raw.is_empty() {
        return Err(AppError::MissingIdentifier);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::RouteNotMatched);
    }
    raw.parse().map_err(|_| AppError::IdentifierOutOfRange)
}

/// Declared body length; an absent or unparsable header counts as zero.
fn content_length(request: &Request) -> usize {
    request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Await the request body.
///
/// The body is only read when a positive `Content-Length` was declared;
/// `empty_message` is the route-specific rejection otherwise.
async fn read_body(
    state: &AppState,
    request: Request,
    empty_message: &'static str,
) -> HandlerResult<Bytes> {
    let length = content_length(&request);
    if length == 0 {
        return Err(AppError::EmptyBody(empty_message));
    }
    if length > state.body_limit {
        return Err(AppError::PayloadTooLarge(length));
    }

    axum::body::to_bytes(request.into_body(), length)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))
}

/// Decode a body and run it through the validator.
///
/// A parse failure and a record that fails validation are the same error
/// to the client.
fn decode_valid(state: &AppState, body: &[u8]) -> HandlerResult<Comic> {
    let comic = state.codec.decode(body).map_err(|e| {
        tracing::debug!("Rejected comic body: {}", e);
        AppError::MalformedPayload
    })?;

    validation::validate(&comic).map_err(|e| {
        tracing::debug!("Rejected comic record: {}", e);
        AppError::MalformedPayload
    })?;

    Ok(comic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comic_id() {
        assert_eq!(parse_comic_id("0").unwrap(), ComicId::new(0));
        assert_eq!(parse_comic_id("007").unwrap(), ComicId::new(7));
        assert!(matches!(parse_comic_id(""), Err(AppError::MissingIdentifier)));
        assert!(matches!(parse_comic_id("abc"), Err(AppError::RouteNotMatched)));
        assert!(matches!(parse_comic_id("-1"), Err(AppError::RouteNotMatched)));
        assert!(matches!(parse_comic_id("1.5"), Err(AppError::RouteNotMatched)));
        assert!(matches!(
            parse_comic_id("99999999999999999999999999"),
            Err(AppError::IdentifierOutOfRange)
        ));
    }

    #[test]
    fn test_content_length_defaults_to_zero() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(content_length(&request), 0);

        let request = axum::http::Request::builder()
            .header(header::CONTENT_LENGTH, "nope")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(content_length(&request), 0);

        let request = axum::http::Request::builder()
            .header(header::CONTENT_LENGTH, "12")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(content_length(&request), 12);
    }
}
