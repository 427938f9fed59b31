// crates/rwgeo-core/src/loader/json.rs
#![cfg(feature = "json")]

use super::common_io;
use crate::error::{GeoError, Result};
use crate::model::{convert, Level, RecordStore};
use crate::raw::{RawStore, RecordRaw};
use crate::traits::DefaultBackend;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source files of a directory dataset, in hierarchy order.
///
/// Every level must be present, as `.json` or `.json.gz`.
pub fn collection_files(dir: &Path) -> Result<Vec<(Level, PathBuf)>> {
    Level::ALL
        .into_iter()
        .map(|level| {
            common_io::collection_file(dir, level.collection())
                .map(|path| (level, path))
                .ok_or_else(|| {
                    GeoError::NotFound(format!(
                        "{}.json missing in {}",
                        level.collection(),
                        dir.display()
                    ))
                })
        })
        .collect()
}

/// Reads one JSON array of records per level from `dir`.
pub fn read_dir(dir: &Path) -> Result<RecordStore<DefaultBackend>> {
    let mut raw = RawStore::default();
    for (level, path) in collection_files(dir)? {
        let reader = common_io::open_stream(&path)?;
        let rows: Vec<RecordRaw> = serde_json::from_reader(reader)?;
        debug!(level = %level, file = %path.display(), records = rows.len(), "read collection");
        *raw_level_mut(&mut raw, level) = rows;
    }
    Ok(convert::from_raw(raw))
}

/// Reads a single JSON object holding all five collections.
pub fn read_file(path: &Path) -> Result<RecordStore<DefaultBackend>> {
    let reader = common_io::open_stream(path)?;
    let raw: RawStore = serde_json::from_reader(reader)?;
    Ok(convert::from_raw(raw))
}

fn raw_level_mut(raw: &mut RawStore, level: Level) -> &mut Vec<RecordRaw> {
    match level {
        Level::Province => &mut raw.provinces,
        Level::District => &mut raw.districts,
        Level::Sector => &mut raw.sectors,
        Level::Cell => &mut raw.cells,
        Level::Village => &mut raw.villages,
    }
}
