//! Application state for the HTTP server.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::codec::{ComicCodec, JsonCodec};
use crate::config::ServerConfig;
use crate::db::CatalogStore;

/// Default request body limit when none is configured (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Default bound on handling one request, body fetch included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog; handlers borrow it for the duration of a request
    pub store: Arc<CatalogStore>,
    /// Wire format for comic records
    pub codec: Arc<dyn ComicCodec>,
    /// Largest request body a handler will read
    pub body_limit: usize,
    /// Requests still running after this long are answered with 408
    pub request_timeout: Duration,
    /// When this state was created
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new application state over `store`, using the JSON codec.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            codec: Arc::new(JsonCodec::new()),
            body_limit: DEFAULT_BODY_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            started_at: Utc::now(),
        }
    }

    /// Replace the codec.
    pub fn with_codec(mut self, codec: Arc<dyn ComicCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Set the request body limit.
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Build the state described by `config` over `store`.
    pub fn from_config(store: Arc<CatalogStore>, config: &ServerConfig) -> Self {
        Self::new(store)
            .with_body_limit(config.server.body_limit_bytes)
            .with_request_timeout(config.request_timeout())
    }
}
