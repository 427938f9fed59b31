// crates/rwgeo-core/src/navigate.rs

//! # Hierarchy Navigator
//!
//! Ancestor, child, sibling and descendant traversal over `parent_code`
//! links. Unknown codes give empty results. Walks carry a visited set, so a
//! corrupt dataset with a parent cycle still terminates.

use crate::index::AdminDb;
use crate::model::{Level, Unit};
use crate::traits::GeoBackend;
use std::collections::HashSet;

/// How an upward walk along `parent_code` links stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkEnd<'a> {
    /// Reached a unit without a parent code.
    Root,
    /// The last unit's parent code does not resolve.
    Dangling(&'a str),
    /// The walk came back to this code.
    Cycle(&'a str),
}

/// Units visited walking upwards, starting unit first.
pub(crate) struct AncestorWalk<'a, B: GeoBackend> {
    pub chain: Vec<Unit<'a, B>>,
    pub end: WalkEnd<'a>,
}

impl<B: GeoBackend> AdminDb<B> {
    pub(crate) fn walk_up<'a>(&'a self, start: Unit<'a, B>) -> AncestorWalk<'a, B> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut chain = Vec::with_capacity(Level::ALL.len());
        let mut current = start;

        loop {
            if !seen.insert(current.code()) {
                return AncestorWalk {
                    chain,
                    end: WalkEnd::Cycle(current.code()),
                };
            }
            chain.push(current);

            let Some(parent_code) = current.parent_code() else {
                return AncestorWalk {
                    chain,
                    end: WalkEnd::Root,
                };
            };
            match self.lookup(parent_code) {
                Some(parent) => current = parent,
                None => {
                    return AncestorWalk {
                        chain,
                        end: WalkEnd::Dangling(parent_code),
                    }
                }
            }
        }
    }

    /// The unit one level up, if its parent code resolves.
    pub fn parent(&self, code: &str) -> Option<Unit<'_, B>> {
        self.lookup(code)?
            .parent_code()
            .and_then(|p| self.lookup(p))
    }

    /// Path from the root province down to `code`, inclusive.
    ///
    /// A well-formed village yields five units:
    /// `[province, district, sector, cell, village]`. The walk stops early at
    /// a dangling parent code or a repeated code; an unknown `code` yields an
    /// empty vector.
    pub fn ancestor_chain(&self, code: &str) -> Vec<Unit<'_, B>> {
        let Some(unit) = self.lookup(code) else {
            return Vec::new();
        };
        let mut chain = self.walk_up(unit).chain;
        chain.reverse();
        chain
    }

    /// Units exactly one level below `code` that name it as their parent,
    /// in store order.
    pub fn direct_children(&self, code: &str) -> Vec<Unit<'_, B>> {
        let Some(child_level) = self.lookup(code).and_then(|u| u.level().child()) else {
            return Vec::new();
        };
        self.index()
            .children_of(code)
            .iter()
            .filter(|slot| slot.level == child_level)
            .map(|&slot| self.unit_at(slot))
            .collect()
    }

    /// Other units on the same level sharing the same parent code.
    ///
    /// Provinces have no siblings. The parent code does not need to resolve:
    /// two districts pointing at the same missing province are still siblings.
    pub fn siblings(&self, code: &str) -> Vec<Unit<'_, B>> {
        let Some(unit) = self.lookup(code) else {
            return Vec::new();
        };
        if unit.level() == Level::Province {
            return Vec::new();
        }
        let Some(parent_code) = unit.parent_code() else {
            return Vec::new();
        };
        self.index()
            .children_of(parent_code)
            .iter()
            .filter(|slot| slot.level == unit.level())
            .map(|&slot| self.unit_at(slot))
            .filter(|u| u.code() != unit.code())
            .collect()
    }

    /// Every unit below `code`, breadth first: all children, then all
    /// grandchildren, and so on. `code` itself is not included.
    pub fn descendants(&self, code: &str) -> Vec<Unit<'_, B>> {
        let Some(root) = self.lookup(code) else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::from([root.code()]);
        let mut out = Vec::new();
        let mut frontier = vec![root];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for unit in &frontier {
                for child in self.direct_children(unit.code()) {
                    if seen.insert(child.code()) {
                        next.push(child);
                    }
                }
            }
            out.extend_from_slice(&next);
            frontier = next;
        }

        out
    }
}
