//! # comicsdb
//!
//! An in-memory comic-book catalog served over HTTP.
//!
//! Comics are addressed by their position in the catalog. Positions are
//! permanent: deleting a comic marks its slot with a sentinel issue number
//! instead of removing it, so every other comic keeps its id.
//!
//! ## Architecture
//!
//! - [`models`]: the [`Comic`](models::Comic) record and [`ComicId`](models::ComicId)
//! - [`codec`]: JSON encoding and decoding behind the [`ComicCodec`](codec::ComicCodec) trait
//! - [`validation`]: required-field checks applied before any mutation
//! - [`db`]: the lock-guarded [`CatalogStore`](db::CatalogStore) and its seed fixtures
//! - [`config`]: TOML and environment configuration for the server
//! - [`http`]: axum router, handlers and error mapping

pub mod codec;
pub mod config;
pub mod db;
pub mod models;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;
