// crates/rwgeo-core/src/index.rs

//! # Hierarchy Index
//!
//! Merges the five record collections into one `code → record` map, built
//! once per [`AdminDb`]. Every other component reads through it.

use crate::code;
use crate::common::DbStats;
use crate::model::{Level, RecordStore, Unit};
use crate::traits::{DefaultBackend, GeoBackend};
use std::collections::HashMap;

/// Position of a record inside the [`RecordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub level: Level,
    pub position: usize,
}

/// Code lookup tables over a [`RecordStore`].
///
/// On duplicate codes the first record in store order wins; the others are
/// kept in [`HierarchyIndex::duplicates`] for the integrity audit and are
/// otherwise invisible to queries.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    by_code: HashMap<String, Slot>,
    /// parent code → child slots, in store order, any level.
    by_parent: HashMap<String, Vec<Slot>>,
    duplicates: Vec<Slot>,
}

impl HierarchyIndex {
    /// One pass over all five collections. O(n).
    pub fn build<B: GeoBackend>(store: &RecordStore<B>) -> Self {
        let mut index = HierarchyIndex {
            by_code: HashMap::with_capacity(store.len()),
            by_parent: HashMap::new(),
            duplicates: Vec::new(),
        };

        for level in Level::ALL {
            for (position, record) in store.level(level).iter().enumerate() {
                let slot = Slot { level, position };
                if index.by_code.contains_key(record.code()) {
                    index.duplicates.push(slot);
                    continue;
                }
                index.by_code.insert(record.code().to_string(), slot);
                if let Some(parent) = record.parent_code() {
                    index
                        .by_parent
                        .entry(parent.to_string())
                        .or_default()
                        .push(slot);
                }
            }
        }

        index
    }

    pub fn get(&self, code: &str) -> Option<Slot> {
        self.by_code.get(code).copied()
    }

    /// Slots of every indexed record declaring `parent_code` as its parent.
    pub fn children_of(&self, parent_code: &str) -> &[Slot] {
        self.by_parent
            .get(parent_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records whose code was already taken by an earlier record.
    pub fn duplicates(&self) -> &[Slot] {
        &self.duplicates
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// The query database: immutable record store plus its index.
///
/// Constructing one *is* building the index; to rebuild, construct a new
/// value (see [`crate::SharedDb`] for swapping a rebuilt database in while
/// readers keep using the old one).
#[derive(Debug, Clone)]
pub struct AdminDb<B: GeoBackend> {
    store: RecordStore<B>,
    index: HierarchyIndex,
}

/// Convenient alias for the default backend.
pub type DefaultAdminDb = AdminDb<DefaultBackend>;

impl<B: GeoBackend> AdminDb<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        let index = HierarchyIndex::build(&store);
        AdminDb { store, index }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    /// Gives the records back, dropping the index.
    pub fn into_store(self) -> RecordStore<B> {
        self.store
    }

    pub fn stats(&self) -> DbStats {
        self.store.stats()
    }

    /// Every unit in store order: provinces, districts, sectors, cells, villages.
    pub fn units(&self) -> impl Iterator<Item = Unit<'_, B>> + '_ {
        self.store.units()
    }

    pub fn units_at(&self, level: Level) -> impl Iterator<Item = Unit<'_, B>> + '_ {
        self.store.units_at(level)
    }

    /// O(1) lookup of a unit by its exact code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rwgeo_core::{AdminDb, DefaultBackend};
    ///
    /// let db = AdminDb::<DefaultBackend>::global().unwrap();
    /// match db.lookup("RW-01-02") {
    ///     Some(unit) => println!("{} ({})", unit.name(), unit.level()),
    ///     None => println!("not found"),
    /// }
    /// ```
    pub fn lookup(&self, code: &str) -> Option<Unit<'_, B>> {
        self.index.get(code).map(|slot| self.unit_at(slot))
    }

    /// True iff [`AdminDb::lookup`] finds `code`.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.index.get(code).is_some()
    }

    /// Level implied by the code's shape; see [`crate::code`].
    ///
    /// This does not consult the dataset: a well-formed code of a unit that
    /// does not exist still classifies.
    pub fn level_of(&self, code: &str) -> Option<Level> {
        code::level_of(code)
    }

    pub(crate) fn unit_at(&self, slot: Slot) -> Unit<'_, B> {
        Unit::new(slot.level, &self.store.level(slot.level)[slot.position])
    }
}
