// crates/rwgeo-core/src/common.rs
use crate::model::Level;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the record store.
///
/// Returned by [`crate::AdminDb::stats`]; counts reflect the materialized
/// in-memory collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub districts: usize,
    pub sectors: usize,
    pub cells: usize,
    pub villages: usize,
}

impl DbStats {
    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::Province => self.provinces,
            Level::District => self.districts,
            Level::Sector => self.sectors,
            Level::Cell => self.cells,
            Level::Village => self.villages,
        }
    }

    /// Sum of all five collections.
    pub fn total(&self) -> usize {
        Level::ALL.into_iter().map(|l| self.count(l)).sum()
    }
}
