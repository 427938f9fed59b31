// crates/rwgeo-core/src/code.rs

//! # Code Scheme
//!
//! The single source of truth for what a well-formed unit code looks like.
//!
//! Codes are hyphen-segmented: the country tag `RW` followed by one numeric
//! discriminator per level, each level extending its parent's code.
//!
//! | Level    | Example             | Segments |
//! |----------|---------------------|----------|
//! | Province | `RW-01`             | 2        |
//! | District | `RW-01-02`          | 3        |
//! | Sector   | `RW-01-02-07`       | 4        |
//! | Cell     | `RW-01-02-07-03`    | 5        |
//! | Village  | `RW-01-02-07-03-11` | 6        |
//!
//! Fixed per-level prefixes such as `RW-D-…` are not accepted.

use crate::model::Level;
use thiserror::Error;

/// Country tag every code starts with (matched case-insensitively).
pub const COUNTRY_TAG: &str = "RW";
pub const SEPARATOR: char = '-';

/// Why a string is not a well-formed code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeFormatError {
    #[error("code is empty")]
    Empty,
    #[error("code must start with `RW-`, got `{0}`")]
    CountryTag(String),
    #[error("segment {position} (`{segment}`) is not a number")]
    Segment { position: usize, segment: String },
    #[error("{0} level segments; expected 1 to 5")]
    Depth(usize),
}

/// Classifies `code` into a level by counting its numeric segments.
///
/// ```rust
/// use rwgeo_core::code::classify;
/// use rwgeo_core::Level;
///
/// assert_eq!(classify("RW-01-02"), Ok(Level::District));
/// assert!(classify("RW-D-0102").is_err());
/// ```
pub fn classify(code: &str) -> Result<Level, CodeFormatError> {
    if code.is_empty() {
        return Err(CodeFormatError::Empty);
    }

    let mut segments = code.split(SEPARATOR);
    let tag = segments.next().unwrap_or_default();
    if !tag.eq_ignore_ascii_case(COUNTRY_TAG) {
        return Err(CodeFormatError::CountryTag(tag.to_string()));
    }

    let mut depth = 0;
    for (i, segment) in segments.enumerate() {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeFormatError::Segment {
                position: i + 1,
                segment: segment.to_string(),
            });
        }
        depth += 1;
    }

    Level::from_depth(depth).ok_or(CodeFormatError::Depth(depth))
}

/// [`classify`] without the reason.
pub fn level_of(code: &str) -> Option<Level> {
    classify(code).ok()
}
