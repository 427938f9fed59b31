// crates/rwgeo-core/src/model/mod.rs
pub mod convert;
mod level;
mod record;
mod store;

pub use level::Level;
pub use record::{Center, Record, Unit, UnitView};
pub use store::RecordStore;
