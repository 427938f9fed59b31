// crates/rwgeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a file, buffers it, and unwraps gzip when the content is gzipped.
///
/// Compression is detected from the magic bytes, not the file name.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `dir/<collection>.json`, or `dir/<collection>.json.gz` if only that exists.
pub fn collection_file(dir: &Path, collection: &str) -> Option<PathBuf> {
    let plain = dir.join(format!("{collection}.json"));
    if plain.is_file() {
        return Some(plain);
    }
    let gz = dir.join(format!("{collection}.json.gz"));
    gz.is_file().then_some(gz)
}

/// A cache file is fresh when it is at least as new as every source.
pub fn is_fresh(cache: &Path, sources: &[PathBuf]) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .map(|t| t <= cache_time)
            .unwrap_or(true)
    })
}
