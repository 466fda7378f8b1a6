//! Field validation for incoming comic records.
//!
//! Every create and update runs a decoded record through [`is_valid`] before
//! the catalog is touched. Validation is all-or-nothing: a record either
//! passes as a whole or the catalog is left unchanged.

use crate::models::Comic;

/// Reason a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("issue must be at least 1, got {0}")]
    IssueOutOfRange(i32),
}

/// Check a record, reporting the first failing field.
pub fn validate(comic: &Comic) -> Result<(), ValidationError> {
    if comic.title.is_empty() {
        return Err(ValidationError::EmptyField("title"));
    }
    if comic.issue < 1 {
        return Err(ValidationError::IssueOutOfRange(comic.issue));
    }

    let credits = [
        ("writer", &comic.writer),
        ("penciler", &comic.penciler),
        ("inker", &comic.inker),
        ("letterer", &comic.letterer),
        ("colorist", &comic.colorist),
    ];
    match credits.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ValidationError::EmptyField(*field)),
        None => Ok(()),
    }
}

/// True iff the title and all five credits are non-empty and `issue >= 1`.
pub fn is_valid(comic: &Comic) -> bool {
    validate(comic).is_ok()
}
