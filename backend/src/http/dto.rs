//! Data Transfer Objects for the HTTP API.
//!
//! Comic bodies go through the codec, not through these types.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Slots in the catalog, deleted ones included
    pub slots: usize,
    /// Live comics in the catalog
    pub comics: usize,
    /// RFC 3339 timestamp of service start
    pub started_at: String,
}
