//! Catalog storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (http/handlers.rs)                       │
//! │  - validate id, await body, decode, validate payload    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  Arc<CatalogStore>
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  CatalogStore (store.rs)                                │
//! │  - Vec<Comic> behind one RwLock                         │
//! │  - append / replace / soft_delete under the write lock  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is owned by whoever builds it (the server binary, or a test)
//! and shared with handlers through `AppState`. There is no global instance.

pub mod error;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use seed::fixture_comics;
pub use store::CatalogStore;
