// crates/rwgeo-core/src/model/store.rs
use super::{Level, Record, Unit};
use crate::common::DbStats;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// The five immutable record collections.
///
/// "Structure of Arrays": one contiguous vector per level. The index refers
/// into these vectors by `(Level, position)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordStore<B: GeoBackend> {
    pub provinces: Vec<Record<B>>,
    pub districts: Vec<Record<B>>,
    pub sectors: Vec<Record<B>>,
    pub cells: Vec<Record<B>>,
    pub villages: Vec<Record<B>>,
}

impl<B: GeoBackend> Default for RecordStore<B> {
    fn default() -> Self {
        RecordStore {
            provinces: Vec::new(),
            districts: Vec::new(),
            sectors: Vec::new(),
            cells: Vec::new(),
            villages: Vec::new(),
        }
    }
}

impl<B: GeoBackend> RecordStore<B> {
    /// All records of one level, in dataset order.
    pub fn level(&self, level: Level) -> &[Record<B>] {
        match level {
            Level::Province => &self.provinces,
            Level::District => &self.districts,
            Level::Sector => &self.sectors,
            Level::Cell => &self.cells,
            Level::Village => &self.villages,
        }
    }

    pub fn level_mut(&mut self, level: Level) -> &mut Vec<Record<B>> {
        match level {
            Level::Province => &mut self.provinces,
            Level::District => &mut self.districts,
            Level::Sector => &mut self.sectors,
            Level::Cell => &mut self.cells,
            Level::Village => &mut self.villages,
        }
    }

    /// Every unit: provinces first, then districts, sectors, cells, villages.
    pub fn units(&self) -> impl Iterator<Item = Unit<'_, B>> + '_ {
        Level::ALL.into_iter().flat_map(move |level| {
            self.level(level)
                .iter()
                .map(move |record| Unit::new(level, record))
        })
    }

    /// Every unit of one level, in dataset order.
    pub fn units_at(&self, level: Level) -> impl Iterator<Item = Unit<'_, B>> + '_ {
        self.level(level)
            .iter()
            .map(move |record| Unit::new(level, record))
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            sectors: self.sectors.len(),
            cells: self.cells.len(),
            villages: self.villages.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.stats().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
