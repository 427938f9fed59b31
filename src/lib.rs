//! Workspace facade: re-exports [`rwgeo_core`] so the demos can use
//! `rwgeo_rs::prelude::*`.

pub use rwgeo_core::*;
