//! HTTP server module for the comic catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Path id parsing and range checks                       │
//! │  - Body fetch, decode, validation                         │
//! │  - Tracing, timeout, Connection: close                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Codec + Validator (codec.rs, validation.rs)              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  CatalogStore (db/)                                       │
//! │  - Vec<Comic> behind one RwLock                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! | Method     | Path          | Success          | Failure |
//! |------------|---------------|------------------|---------|
//! | GET        | /comic/{id}   | 200, JSON comic  | 406     |
//! | DELETE     | /comic/{id}   | 200, empty       | 406     |
//! | PUT        | /comic/{id}   | 200, empty       | 406     |
//! | POST, PUT  | /comic        | 200, empty       | 406     |
//! | GET        | /health       | 200, JSON status |         |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
