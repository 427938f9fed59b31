// crates/rwgeo-core/src/model/level.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five tiers of the administrative hierarchy.
///
/// The only legal adjacency is `Province → District → Sector → Cell → Village`.
/// Ordering follows depth, so `Level::Province < Level::Village`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    District,
    Sector,
    Cell,
    Village,
}

impl Level {
    /// All levels, root first. This is also the record store iteration order.
    pub const ALL: [Level; 5] = [
        Level::Province,
        Level::District,
        Level::Sector,
        Level::Cell,
        Level::Village,
    ];

    /// Depth in the hierarchy: Province = 1 … Village = 5.
    ///
    /// This is the expected length of a well-formed ancestor chain.
    pub fn depth(self) -> usize {
        match self {
            Level::Province => 1,
            Level::District => 2,
            Level::Sector => 3,
            Level::Cell => 4,
            Level::Village => 5,
        }
    }

    pub fn from_depth(depth: usize) -> Option<Level> {
        Level::ALL.get(depth.checked_sub(1)?).copied()
    }

    /// The level directly above, `None` for a province.
    pub fn parent(self) -> Option<Level> {
        Level::from_depth(self.depth() - 1)
    }

    /// The level directly below, `None` for a village.
    pub fn child(self) -> Option<Level> {
        Level::from_depth(self.depth() + 1)
    }

    /// True iff `child` sits exactly one level below `self`.
    pub fn is_parent_of(self, child: Level) -> bool {
        self.child() == Some(child)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::District => "district",
            Level::Sector => "sector",
            Level::Cell => "cell",
            Level::Village => "village",
        }
    }

    /// Collection name, also the dataset file stem (`provinces.json`, …).
    pub fn collection(self) -> &'static str {
        match self {
            Level::Province => "provinces",
            Level::District => "districts",
            Level::Sector => "sectors",
            Level::Cell => "cells",
            Level::Village => "villages",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Accepts the singular or collection name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Level::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s) || l.collection().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown level: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_a_single_ladder() {
        assert_eq!(Level::Province.parent(), None);
        assert_eq!(Level::Village.child(), None);
        for pair in Level::ALL.windows(2) {
            assert!(pair[0].is_parent_of(pair[1]));
            assert!(!pair[1].is_parent_of(pair[0]));
            assert_eq!(pair[1].parent(), Some(pair[0]));
        }
        assert!(!Level::Province.is_parent_of(Level::Village));
        assert!(!Level::District.is_parent_of(Level::Cell));
    }

    #[test]
    fn depth_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::from_depth(level.depth()), Some(level));
        }
        assert_eq!(Level::from_depth(0), None);
        assert_eq!(Level::from_depth(6), None);
    }

    #[test]
    fn parses_singular_and_plural() {
        assert_eq!("Sector".parse::<Level>(), Ok(Level::Sector));
        assert_eq!("villages".parse::<Level>(), Ok(Level::Village));
        assert!("county".parse::<Level>().is_err());
    }
}
