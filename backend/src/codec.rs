//! JSON codec for comic records.
//!
//! Handlers never touch `serde_json` directly; they go through the
//! [`ComicCodec`] capability so the wire format lives in one place.
//!
//! The wire format is a flat object with exactly seven keys:
//!
//! ```json
//! {"title":"The Fantastic Four","issue":1,"writer":"Stan Lee","penciler":"Jack Kirby",
//!  "inker":"George Klein","letterer":"Artie Simek","colorist":"Stan Goldberg"}
//! ```
//!
//! `issue` is a JSON number, all other fields are strings. Key order is not
//! significant when decoding; unknown keys are ignored.

use crate::models::Comic;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Error type for codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input was not valid JSON, or a required key was absent or mistyped.
    #[error("Malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Bidirectional converter between [`Comic`] records and their text form.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; a single instance is shared by
/// every request handler.
pub trait ComicCodec: Send + Sync {
    /// Encode a record. Has no side effects.
    fn encode(&self, comic: &Comic) -> CodecResult<String>;

    /// Decode a record from raw request bytes.
    fn decode(&self, bytes: &[u8]) -> CodecResult<Comic>;

    fn decode_str(&self, text: &str) -> CodecResult<Comic> {
        self.decode(text.as_bytes())
    }
}

/// `serde_json` backed codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ComicCodec for JsonCodec {
    fn encode(&self, comic: &Comic) -> CodecResult<String> {
        serde_json::to_string(comic).map_err(CodecError::Encode)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Comic> {
        serde_json::from_slice(bytes).map_err(CodecError::MalformedInput)
    }
}
