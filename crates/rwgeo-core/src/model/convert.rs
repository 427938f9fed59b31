// crates/rwgeo-core/src/model/convert.rs
use super::{Center, Record, RecordStore};
use crate::raw::{RawStore, RecordRaw};
use crate::traits::GeoBackend;

/// Trims a string field; blank optional fields become `None`.
fn opt_str<B: GeoBackend>(s: Option<&str>) -> Option<B::Str> {
    s.map(str::trim).filter(|v| !v.is_empty()).map(B::str_from)
}

/// **Record Converter:** Raw -> Record.
pub fn record_from_raw<B: GeoBackend>(raw: &RecordRaw) -> Record<B> {
    Record {
        code: B::str_from(raw.code.trim()),
        name: B::str_from(raw.name.trim()),
        slug: B::str_from(raw.slug.trim()),
        parent_code: opt_str::<B>(raw.parent_code.as_deref()),
        center: raw.center.as_ref().map(|c| Center {
            lat: B::float_from(c.lat),
            lng: B::float_from(c.lng),
        }),
    }
}

/// **Store Converter:** five raw collections -> RecordStore.
///
/// Order inside each collection is preserved; it is the iteration order
/// every query reports in.
pub fn from_raw<B: GeoBackend>(raw: RawStore) -> RecordStore<B> {
    let convert = |rows: Vec<RecordRaw>| -> Vec<Record<B>> {
        rows.iter().map(record_from_raw::<B>).collect()
    };
    RecordStore {
        provinces: convert(raw.provinces),
        districts: convert(raw.districts),
        sectors: convert(raw.sectors),
        cells: convert(raw.cells),
        villages: convert(raw.villages),
    }
}
