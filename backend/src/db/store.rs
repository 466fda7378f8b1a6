//! In-memory catalog store.
//!
//! Comics live in a `Vec` addressed by position. A slot index is assigned on
//! append and stays with that record forever: deletion overwrites the slot
//! with a sentinel record instead of removing it, so the vector never shrinks
//! and indices are never reused.
//!
//! All mutations take the write side of a single `RwLock` and hold it only
//! for the in-memory assignment. Reads take the read side and hand out
//! clones, so a reader never observes a record halfway through a replace.

use log::debug;
use parking_lot::RwLock;

use super::error::{StoreError, StoreResult};
use crate::models::{Comic, ComicId};

/// Ordered, index-addressable collection of comics.
#[derive(Debug, Default)]
pub struct CatalogStore {
    comics: RwLock<Vec<Comic>>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `comics`, in order, at indices `0..comics.len()`.
    pub fn with_comics(comics: Vec<Comic>) -> Self {
        Self {
            comics: RwLock::new(comics),
        }
    }

    /// Create a store pre-seeded with the fixture records.
    pub fn seeded() -> Self {
        Self::with_comics(super::seed::fixture_comics())
    }

    /// Number of slots, deleted ones included.
    pub fn len(&self) -> usize {
        self.comics.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comics.read().is_empty()
    }

    /// Number of slots holding a live record.
    pub fn live_count(&self) -> usize {
        self.comics.read().iter().filter(|c| !c.is_deleted()).count()
    }

    /// True if `id` addresses a live record.
    pub fn contains(&self, id: ComicId) -> bool {
        self.comics
            .read()
            .get(id.value())
            .is_some_and(|c| !c.is_deleted())
    }

    /// Fetch a copy of the record at `id`.
    ///
    /// # Errors
    /// `Unassigned` if the index was never handed out, `Deleted` if the slot
    /// is soft-deleted.
    pub fn get(&self, id: ComicId) -> StoreResult<Comic> {
        let comics = self.comics.read();
        match comics.get(id.value()) {
            Some(comic) if !comic.is_deleted() => Ok(comic.clone()),
            Some(_) => Err(StoreError::Deleted(id)),
            None => Err(StoreError::Unassigned {
                id,
                len: comics.len(),
            }),
        }
    }

    /// Append `comic` and return the index it was assigned.
    pub fn append(&self, comic: Comic) -> ComicId {
        let id = {
            let mut comics = self.comics.write();
            comics.push(comic);
            ComicId::new(comics.len() - 1)
        };
        debug!("Appended comic at index {}", id);
        id
    }

    /// Overwrite the slot at `id` with `comic`.
    ///
    /// Callers validate the index up front; the bounds check here is repeated
    /// inside the critical section since the caller may have awaited I/O in
    /// between.
    ///
    /// # Errors
    /// `Unassigned` if the index was never handed out.
    pub fn replace(&self, id: ComicId, comic: Comic) -> StoreResult<()> {
        self.overwrite(id, comic)?;
        debug!("Replaced comic at index {}", id);
        Ok(())
    }

    /// Mark the slot at `id` as deleted.
    ///
    /// Deleting an already deleted slot succeeds.
    ///
    /// # Errors
    /// `Unassigned` if the index was never handed out.
    pub fn soft_delete(&self, id: ComicId) -> StoreResult<()> {
        self.overwrite(id, Comic::deleted())?;
        debug!("Soft-deleted comic at index {}", id);
        Ok(())
    }

    fn overwrite(&self, id: ComicId, comic: Comic) -> StoreResult<()> {
        let mut comics = self.comics.write();
        let len = comics.len();
        match comics.get_mut(id.value()) {
            Some(slot) => {
                *slot = comic;
                Ok(())
            }
            None => Err(StoreError::Unassigned { id, len }),
        }
    }
}
