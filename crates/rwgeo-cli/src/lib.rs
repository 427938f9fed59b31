//! rwgeo-cli
//! =========
//!
//! Command-line interface for the `rwgeo-core` administrative hierarchy
//! index.
//!
//! This crate primarily provides a binary (`rwgeo`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install rwgeo-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! rwgeo --help
//! rwgeo stats
//! rwgeo get RW-01-02
//! rwgeo --lang rw ancestors RW-01-02-01-01-01
//! rwgeo suggest kimironko
//! rwgeo audit
//! ```
//!
//! For programmatic access use the [`rwgeo-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/rwgeo-rs>
//! - Core crate: <https://docs.rs/rwgeo-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
