//! Error types for catalog store operations.

use crate::models::ComicId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The index was never handed out by `append`.
    #[error("comic {id} does not exist (catalog has {len} slots)")]
    Unassigned { id: ComicId, len: usize },

    /// The slot exists but holds a soft-deleted record.
    #[error("comic {0} was deleted")]
    Deleted(ComicId),
}

impl StoreError {
    /// The id the failed operation was addressed to.
    pub fn id(&self) -> ComicId {
        match self {
            Self::Unassigned { id, .. } | Self::Deleted(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_slot() {
        let err = StoreError::Unassigned {
            id: ComicId::new(7),
            len: 2,
        };
        assert_eq!(err.to_string(), "comic 7 does not exist (catalog has 2 slots)");
        assert_eq!(err.id(), ComicId::new(7));

        let err = StoreError::Deleted(ComicId::new(0));
        assert_eq!(err.to_string(), "comic 0 was deleted");
        assert_eq!(err.id(), ComicId::new(0));
    }
}
