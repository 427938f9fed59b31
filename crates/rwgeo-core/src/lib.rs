// crates/rwgeo-core/src/lib.rs

//! # rwgeo-core
//!
//! In-memory index over Rwanda's five-level administrative hierarchy
//! (Province → District → Sector → Cell → Village) with lookup, navigation,
//! text search and integrity checks.
//!
//! ```no_run
//! use rwgeo_core::{AdminDb, DefaultBackend};
//!
//! let db = AdminDb::<DefaultBackend>::global()?;
//! for unit in db.ancestor_chain("RW-01-02-01-01-01") {
//!     println!("{:<9} {}", unit.level(), unit.name());
//! }
//! for s in db.suggest("kimi", 5) {
//!     println!("{} ({:?})", s.unit.name(), s.match_type);
//! }
//! # Ok::<(), rwgeo_core::GeoError>(())
//! ```

pub mod code;
pub mod common;
pub mod error;
pub mod index;
pub mod lang;
pub mod loader;
pub mod model;
mod navigate;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod shared;
pub mod text;
pub mod traits;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use crate::common::DbStats;
pub use crate::error::{GeoError, Result};
pub use crate::index::{AdminDb, DefaultAdminDb, HierarchyIndex};
pub use crate::lang::Language;
pub use crate::model::{Center, Level, Record, RecordStore, Unit, UnitView};
pub use crate::search::{FuzzyHit, MatchField, MatchType, Suggestion};
pub use crate::shared::SharedDb;
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
pub use crate::validate::{
    AuditReport, AuditSummary, CodeCheck, Issue, IssueKind, ParentChildCheck,
};

/// Everything needed for typical queries.
pub mod prelude {
    pub use crate::error::{GeoError, Result};
    pub use crate::index::{AdminDb, DefaultAdminDb};
    pub use crate::lang::{province_display_name, Language};
    pub use crate::model::{Level, Unit};
    pub use crate::search::{MatchField, MatchType};
    pub use crate::traits::{DefaultBackend, NameMatch, StandardBackend};
    pub use crate::validate::IssueKind;
}
