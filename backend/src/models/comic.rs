//! Comic record and catalog identifier types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Zero-based position of a comic inside the catalog.
///
/// An id is handed out by `append` and names the same slot for the lifetime
/// of the store, including after that slot is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComicId(usize);

impl ComicId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot index.
    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComicId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// One catalog entry.
///
/// A record whose `issue` equals [`Comic::DELETED_ISSUE`] occupies its slot
/// but is logically absent. The remaining fields of such a record carry no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    pub title: String,
    pub issue: i32,
    pub writer: String,
    pub penciler: String,
    pub inker: String,
    pub letterer: String,
    pub colorist: String,
}

impl Comic {
    /// Sentinel issue number marking a soft-deleted slot.
    pub const DELETED_ISSUE: i32 = -1;

    /// The record written over a slot when it is deleted.
    pub fn deleted() -> Self {
        Self::default()
    }

    pub fn is_deleted(&self) -> bool {
        self.issue == Self::DELETED_ISSUE
    }
}

impl Default for Comic {
    fn default() -> Self {
        Self {
            title: String::new(),
            issue: Self::DELETED_ISSUE,
            writer: String::new(),
            penciler: String::new(),
            inker: String::new(),
            letterer: String::new(),
            colorist: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_comic_is_deleted() {
        let comic = Comic::default();
        assert_eq!(comic.issue, Comic::DELETED_ISSUE);
        assert!(comic.is_deleted());
        assert!(comic.title.is_empty());
        assert_eq!(Comic::deleted(), comic);
    }

    #[test]
    fn test_comic_id_parses_digits() {
        let id: ComicId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert!("4x".parse::<ComicId>().is_err());
        assert!("-1".parse::<ComicId>().is_err());
        assert!("".parse::<ComicId>().is_err());
    }

    #[test]
    fn test_comic_id_orders_by_slot() {
        assert!(ComicId::new(2) < ComicId::new(10));
        assert_eq!(serde_json::to_string(&ComicId::new(3)).unwrap(), "3");
    }
}
