// crates/rwgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and hands parsed records
//! to [`AdminDb::new`]. This is the only part of the crate that touches the
//! filesystem or returns errors.
//!
//! Accepted inputs for [`AdminDb::load_from_path`]:
//!
//! - a directory with `provinces.json` … `villages.json` (each optionally
//!   `.json.gz`); if it also holds a fresh `rwgeo.bin`, that is used instead
//! - a `.bin` snapshot written by the `builder` feature
//! - a single `.json` file holding all five collections

use crate::error::{GeoError, Result};
use crate::index::AdminDb;
use crate::model::RecordStore;
use crate::traits::DefaultBackend;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub(crate) mod common_io;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "builder")]
pub mod builder;

static ADMIN_DB: OnceCell<AdminDb<DefaultBackend>> = OnceCell::new();

/// Environment variable overriding [`AdminDb::default_data_dir`].
pub const DATA_DIR_ENV: &str = "RWGEO_DATA_DIR";

/// Snapshot file name looked up inside a data directory.
pub const SNAPSHOT_FILENAME: &str = "rwgeo.bin";

impl AdminDb<DefaultBackend> {
    /// `$RWGEO_DATA_DIR` if set, otherwise the crate's bundled `data/`.
    pub fn default_data_dir() -> PathBuf {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        }
    }

    /// Process-wide database, loaded from the default data directory on
    /// first use. Every later call returns the same instance.
    pub fn global() -> Result<&'static Self> {
        ADMIN_DB.get_or_try_init(Self::load)
    }

    /// Loads a fresh, unshared database from the default data directory.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let store = if path.is_dir() {
            load_dir(path)?
        } else if is_snapshot(path) {
            load_snapshot(path)?
        } else {
            load_json_file(path)?
        };

        if store.is_empty() {
            return Err(GeoError::InvalidData(format!(
                "dataset at {} contains no units",
                path.display()
            )));
        }

        let db = AdminDb::new(store);
        let stats = db.stats();
        info!(
            path = %path.display(),
            provinces = stats.provinces,
            districts = stats.districts,
            sectors = stats.sectors,
            cells = stats.cells,
            villages = stats.villages,
            "loaded administrative units"
        );
        if !db.index().duplicates().is_empty() {
            warn!(
                count = db.index().duplicates().len(),
                "duplicate codes ignored by the index"
            );
        }
        Ok(db)
    }
}

fn is_snapshot(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}

fn load_dir(dir: &Path) -> Result<RecordStore<DefaultBackend>> {
    let snapshot = dir.join(SNAPSHOT_FILENAME);

    #[cfg(feature = "json")]
    {
        match json::collection_files(dir) {
            Ok(files) => {
                let sources: Vec<PathBuf> = files.into_iter().map(|(_, p)| p).collect();
                if common_io::is_fresh(&snapshot, &sources) {
                    match load_snapshot(&snapshot) {
                        Ok(store) => return Ok(store),
                        Err(e) => warn!(error = %e, "ignoring unreadable snapshot"),
                    }
                }
                json::read_dir(dir)
            }
            Err(e) if snapshot.is_file() => {
                debug!(error = %e, "no JSON collections, using snapshot");
                load_snapshot(&snapshot)
            }
            Err(e) => Err(e),
        }
    }

    #[cfg(not(feature = "json"))]
    {
        load_snapshot(&snapshot)
    }
}

fn load_snapshot(path: &Path) -> Result<RecordStore<DefaultBackend>> {
    debug!(path = %path.display(), "reading snapshot");
    let reader = common_io::open_stream(path)?;
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(feature = "json")]
fn load_json_file(path: &Path) -> Result<RecordStore<DefaultBackend>> {
    debug!(path = %path.display(), "reading single-file dataset");
    json::read_file(path)
}

#[cfg(not(feature = "json"))]
fn load_json_file(path: &Path) -> Result<RecordStore<DefaultBackend>> {
    Err(GeoError::InvalidData(format!(
        "{} is not a snapshot and the 'json' feature is disabled",
        path.display()
    )))
}
