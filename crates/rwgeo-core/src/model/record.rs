// crates/rwgeo-core/src/model/record.rs
use super::Level;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize, Serializer};

/// Advisory geographic centre of a unit. Not used by any algorithm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Center<B: GeoBackend> {
    pub lat: B::Float,
    pub lng: B::Float,
}

impl<B: GeoBackend> Center<B> {
    pub fn lat(&self) -> f64 {
        B::float_to_f64(self.lat)
    }

    pub fn lng(&self) -> f64 {
        B::float_to_f64(self.lng)
    }
}

/// One administrative unit as stored in the record store.
///
/// The record itself does not carry its level: the level is fixed by the
/// collection it lives in and is attached when the record is viewed as a
/// [`Unit`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record<B: GeoBackend> {
    pub code: B::Str,
    pub name: B::Str,
    pub slug: B::Str,
    /// Code of the unit one level up; `None` only for provinces.
    pub parent_code: Option<B::Str>,
    pub center: Option<Center<B>>,
}

impl<B: GeoBackend> Record<B> {
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn slug(&self) -> &str {
        self.slug.as_ref()
    }

    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_ref().map(|s| s.as_ref())
    }
}

impl<B: GeoBackend> NameMatch for Record<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// A record together with its level tag.
///
/// This is the value every lookup, navigation and search call hands back.
/// It borrows from the database and is `Copy`, so it is cheap to pass
/// around and collect.
#[derive(Debug)]
pub struct Unit<'a, B: GeoBackend> {
    level: Level,
    record: &'a Record<B>,
}

impl<B: GeoBackend> Clone for Unit<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: GeoBackend> Copy for Unit<'_, B> {}

impl<'a, B: GeoBackend> Unit<'a, B> {
    pub fn new(level: Level, record: &'a Record<B>) -> Self {
        Unit { level, record }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn record(&self) -> &'a Record<B> {
        self.record
    }

    pub fn code(&self) -> &'a str {
        self.record.code()
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn slug(&self) -> &'a str {
        self.record.slug()
    }

    pub fn parent_code(&self) -> Option<&'a str> {
        self.record.parent_code()
    }

    /// `(latitude, longitude)` when the dataset carries a centre.
    pub fn center(&self) -> Option<(f64, f64)> {
        self.record.center.as_ref().map(|c| (c.lat(), c.lng()))
    }

    /// Flat, serializable projection of this unit.
    pub fn view(&self) -> UnitView<'a> {
        UnitView {
            level: self.level,
            code: self.code(),
            name: self.name(),
            slug: self.slug(),
            parent_code: self.parent_code(),
            center: self.center().map(|(lat, lng)| [lat, lng]),
        }
    }
}

impl<B: GeoBackend> PartialEq for Unit<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.code() == other.code()
    }
}

impl<B: GeoBackend> Eq for Unit<'_, B> {}

impl<B: GeoBackend> NameMatch for Unit<'_, B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: GeoBackend> Serialize for Unit<'_, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

/// JSON-friendly view of a [`Unit`], as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitView<'a> {
    pub level: Level,
    pub code: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
}
