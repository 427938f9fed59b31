// crates/rwgeo-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::{json, SNAPSHOT_FILENAME};
use crate::error::{GeoError, Result};
use crate::index::AdminDb;
use crate::model::RecordStore;
use crate::traits::DefaultBackend;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

/// Reads the JSON collections in `source_dir` and writes a snapshot to
/// `out_path` (defaults to `source_dir/rwgeo.bin`). Returns the path written.
pub fn build_snapshot(
    source_dir: &Path,
    out_path: Option<&Path>,
    compression: CompressionMode,
) -> Result<std::path::PathBuf> {
    let out = out_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source_dir.join(SNAPSHOT_FILENAME));
    info!(source = %source_dir.display(), out = %out.display(), ?compression, "building snapshot");

    let store = json::read_dir(source_dir)?;
    write_snapshot(&out, &store, compression)?;
    Ok(out)
}

impl AdminDb<DefaultBackend> {
    /// Writes this database's records as a snapshot; the index is rebuilt on load.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self.store(), CompressionMode::default())
    }
}

/// Writes a bincode-encoded record store, optionally gzipped.
pub fn write_snapshot(
    path: &Path,
    store: &RecordStore<DefaultBackend>,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path).map_err(GeoError::Io)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode::serialize_into(&mut encoder, store)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            bincode::serialize_into(&mut writer, store)?;
            writer.flush()?;
        }
    }

    info!(path = %path.display(), units = store.len(), "snapshot written");
    Ok(())
}
