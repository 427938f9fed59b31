// crates/rwgeo-core/src/error.rs

//! Errors raised at the loader boundary.
//!
//! Query, navigation, search and validation calls are total and never return
//! these; only reading the record store from disk (and writing snapshots) can
//! fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// A dataset file or directory does not exist or cannot be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The input parsed, but is not usable as a record store.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
