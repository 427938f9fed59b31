// crates/rwgeo-core/src/validate.rs

//! # Integrity Validator
//!
//! Reports structural defects; never repairs and never panics.
//!
//! Checked invariants:
//! - codes and slugs are unique across all five collections
//! - every non-province names an existing parent exactly one level up
//! - walking parents from any unit reaches a province in `depth − 1` hops
//!   without revisiting a code

use crate::code;
use crate::index::AdminDb;
use crate::model::{Level, Unit};
use crate::navigate::WalkEnd;
use crate::traits::GeoBackend;
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of [`AdminDb::validate_code_format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of [`AdminDb::validate_parent_child`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentChildCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ParentChildCheck {
    fn invalid(parent_level: Option<Level>, child_level: Option<Level>, reason: String) -> Self {
        ParentChildCheck {
            valid: false,
            parent_level,
            child_level,
            reason: Some(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Parent code set but does not resolve.
    Orphaned,
    /// Parent resolves but is not exactly one level up.
    InvalidParent,
    /// The ancestor walk revisits a code.
    CircularReference,
    /// The ancestor chain is shorter or longer than the level's depth.
    MissingUnit,
    /// The code was already used by an earlier record.
    DuplicateCode,
    /// The slug was already used by an earlier record.
    DuplicateSlug,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub code: String,
}

/// Per-kind issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub total_units: usize,
    pub orphaned: usize,
    pub invalid_parent: usize,
    pub circular_reference: usize,
    pub missing_unit: usize,
    pub duplicate_code: usize,
    pub duplicate_slug: usize,
}

impl AuditSummary {
    fn count(&mut self, kind: IssueKind) {
        let slot = match kind {
            IssueKind::Orphaned => &mut self.orphaned,
            IssueKind::InvalidParent => &mut self.invalid_parent,
            IssueKind::CircularReference => &mut self.circular_reference,
            IssueKind::MissingUnit => &mut self.missing_unit,
            IssueKind::DuplicateCode => &mut self.duplicate_code,
            IssueKind::DuplicateSlug => &mut self.duplicate_slug,
        };
        *slot += 1;
    }

    pub fn issues(&self) -> usize {
        self.orphaned
            + self.invalid_parent
            + self.circular_reference
            + self.missing_unit
            + self.duplicate_code
            + self.duplicate_slug
    }
}

/// Result of [`AdminDb::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub valid: bool,
    pub issues: Vec<Issue>,
    pub summary: AuditSummary,
}

impl AuditReport {
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}

impl<B: GeoBackend> AdminDb<B> {
    /// Checks the shape of `code` against [`crate::code`]; the unit does not
    /// need to exist.
    pub fn validate_code_format(&self, code: &str) -> CodeCheck {
        match code::classify(code) {
            Ok(level) => CodeCheck {
                valid: true,
                level: Some(level),
                reason: None,
            },
            Err(e) => CodeCheck {
                valid: false,
                level: None,
                reason: Some(e.to_string()),
            },
        }
    }

    /// Checks that `child_code` sits exactly one level below `parent_code`
    /// and names it as its parent. Level adjacency is checked first.
    pub fn validate_parent_child(&self, parent_code: &str, child_code: &str) -> ParentChildCheck {
        let parent = self.lookup(parent_code);
        let child = self.lookup(child_code);
        let parent_level = parent.map(|u| u.level());
        let child_level = child.map(|u| u.level());

        let (Some(parent), Some(child)) = (parent, child) else {
            let reason = match (parent, child) {
                (None, None) => {
                    format!("unknown parent code {parent_code} and child code {child_code}")
                }
                (None, _) => format!("unknown parent code {parent_code}"),
                _ => format!("unknown child code {child_code}"),
            };
            return ParentChildCheck::invalid(parent_level, child_level, reason);
        };

        if !parent.level().is_parent_of(child.level()) {
            let reason = format!(
                "a {} cannot directly contain a {}",
                parent.level(),
                child.level()
            );
            return ParentChildCheck::invalid(parent_level, child_level, reason);
        }

        if child.parent_code() != Some(parent.code()) {
            let reason = match child.parent_code() {
                Some(declared) => format!(
                    "{} {child_code} declares parent {declared}, not {parent_code}",
                    child.level()
                ),
                None => format!("{} {child_code} declares no parent", child.level()),
            };
            return ParentChildCheck::invalid(parent_level, child_level, reason);
        }

        ParentChildCheck {
            valid: true,
            parent_level,
            child_level,
            reason: None,
        }
    }

    /// Full structural scan of the dataset.
    ///
    /// Each unit contributes at most one issue about its own parent link
    /// (`orphaned`, `invalid_parent` or `missing_unit`), plus a
    /// `circular_reference` whenever its ancestor walk revisits a code.
    /// A chain-length `missing_unit` is only raised for units whose own link
    /// is fine and whose walk reaches a root. A chain running into an orphan
    /// further up is not reported again; the orphan already is.
    pub fn audit(&self) -> AuditReport {
        let mut issues = Vec::new();

        for &slot in self.index().duplicates() {
            let unit = self.unit_at(slot);
            issues.push(Issue {
                kind: IssueKind::DuplicateCode,
                message: format!(
                    "{} {} reuses code {}",
                    unit.level(),
                    unit.name(),
                    unit.code()
                ),
                code: unit.code().to_string(),
            });
        }

        let mut slugs: HashMap<&str, &str> = HashMap::new();
        for unit in self.units() {
            if let Some(first) = slugs.insert(unit.slug(), unit.code()) {
                // Keep the first owner on record.
                slugs.insert(unit.slug(), first);
                issues.push(Issue {
                    kind: IssueKind::DuplicateSlug,
                    message: format!("slug {} already used by {first}", unit.slug()),
                    code: unit.code().to_string(),
                });
            }
        }

        for unit in self.units() {
            let direct = self.link_issue(unit);
            let walk = self.walk_up(unit);
            let chained = match walk.end {
                WalkEnd::Cycle(at) => Some((
                    IssueKind::CircularReference,
                    format!(
                        "ancestor chain of {} {} loops back to {at}",
                        unit.level(),
                        unit.code()
                    ),
                )),
                WalkEnd::Root if direct.is_none() && walk.chain.len() != unit.level().depth() => {
                    Some((
                        IssueKind::MissingUnit,
                        format!(
                            "ancestor chain of {} {} has {} units, expected {}",
                            unit.level(),
                            unit.code(),
                            walk.chain.len(),
                            unit.level().depth()
                        ),
                    ))
                }
                WalkEnd::Root | WalkEnd::Dangling(_) => None,
            };
            for (kind, message) in direct.into_iter().chain(chained) {
                issues.push(Issue {
                    kind,
                    message,
                    code: unit.code().to_string(),
                });
            }
        }

        let mut summary = AuditSummary {
            total_units: self.stats().total(),
            ..AuditSummary::default()
        };
        for issue in &issues {
            summary.count(issue.kind);
        }

        AuditReport {
            valid: issues.is_empty(),
            issues,
            summary,
        }
    }

    /// Problems with the unit's own parent link.
    fn link_issue(&self, unit: Unit<'_, B>) -> Option<(IssueKind, String)> {
        let level = unit.level();
        let code = unit.code();

        match (level, unit.parent_code()) {
            (Level::Province, Some(parent)) => Some((
                IssueKind::InvalidParent,
                format!("province {code} declares parent {parent}"),
            )),
            (Level::Province, None) => None,
            (_, None) => Some((
                IssueKind::MissingUnit,
                format!("{level} {code} has no parent code"),
            )),
            (_, Some(parent_code)) => match self.lookup(parent_code) {
                None => Some((
                    IssueKind::Orphaned,
                    format!("{level} {code} points to missing parent {parent_code}"),
                )),
                Some(parent) if !parent.level().is_parent_of(level) => Some((
                    IssueKind::InvalidParent,
                    format!(
                        "{level} {code} has {} {parent_code} as parent",
                        parent.level()
                    ),
                )),
                Some(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, sample_store};

    #[test]
    fn code_format_reports_level_or_reason() {
        let db = AdminDb::new(sample_store());
        let ok = db.validate_code_format("RW-01-02-01");
        assert!(ok.valid);
        assert_eq!(ok.level, Some(Level::Sector));
        assert_eq!(ok.reason, None);

        let bad = db.validate_code_format("RW-S-0102");
        assert!(!bad.valid);
        assert_eq!(bad.level, None);
        assert!(bad.reason.is_some());
    }

    #[test]
    fn parent_child_accepts_adjacent_declared_pairs() {
        let db = AdminDb::new(sample_store());
        let check = db.validate_parent_child("RW-01-02", "RW-01-02-01");
        assert!(check.valid);
        assert_eq!(check.parent_level, Some(Level::District));
        assert_eq!(check.child_level, Some(Level::Sector));
    }

    #[test]
    fn parent_child_rejects_non_adjacent_levels() {
        let db = AdminDb::new(sample_store());
        let check = db.validate_parent_child("RW-01", "RW-01-02-01-01-01");
        assert!(!check.valid);
        assert_eq!(check.parent_level, Some(Level::Province));
        assert_eq!(check.child_level, Some(Level::Village));
        assert_eq!(
            check.reason.as_deref(),
            Some("a province cannot directly contain a village")
        );
    }

    #[test]
    fn parent_child_rejects_skipped_level_even_when_declared() {
        let mut store = sample_store();
        store.cells[1].parent_code = Some("RW-01-02".to_string());
        let db = AdminDb::new(store);
        let cell = db.store().cells[1].code.clone();

        let check = db.validate_parent_child("RW-01-02", &cell);
        assert!(!check.valid);
        assert!(check.reason.unwrap().contains("cannot directly contain"));
    }

    #[test]
    fn parent_child_rejects_unknown_and_mismatched_codes() {
        let db = AdminDb::new(sample_store());
        let unknown = db.validate_parent_child("RW-99", "RW-01-02");
        assert!(!unknown.valid);
        assert_eq!(unknown.parent_level, None);
        assert_eq!(unknown.child_level, Some(Level::District));

        let stranger = db.validate_parent_child("RW-02", "RW-01-02");
        assert!(!stranger.valid);
        assert!(stranger.reason.unwrap().contains("declares parent RW-01"));
    }

    #[test]
    fn clean_dataset_audits_valid() {
        let db = AdminDb::new(sample_store());
        let report = db.audit();
        assert!(report.valid, "{:?}", report.issues);
        assert!(report.issues.is_empty());
        assert_eq!(report.summary.total_units, db.stats().total());
        assert_eq!(report.summary.issues(), 0);
    }

    #[test]
    fn orphan_is_reported_once_at_its_source() {
        let mut store = sample_store();
        store.districts[1].parent_code = Some("RW-99".to_string());
        let db = AdminDb::new(store);

        let report = db.audit();
        assert!(!report.valid);
        let orphans: Vec<_> = report.issues_of(IssueKind::Orphaned).collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].code, "RW-01-02");
        assert_eq!(report.summary.orphaned, 1);
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn skipped_level_is_an_invalid_parent() {
        let mut store = sample_store();
        let cell = store
            .cells
            .iter_mut()
            .find(|r| r.code == "RW-01-02-01-02")
            .expect("cell");
        cell.parent_code = Some("RW-01-02".to_string());
        let db = AdminDb::new(store);

        let report = db.audit();
        let invalid: Vec<_> = report.issues_of(IssueKind::InvalidParent).collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].code, "RW-01-02-01-02");
        // Its village now has a four-unit chain.
        let missing: Vec<_> = report.issues_of(IssueKind::MissingUnit).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].code, "RW-01-02-01-02-01");
    }

    #[test]
    fn cycles_are_detected() {
        let mut store = sample_store();
        let sector = store
            .sectors
            .iter_mut()
            .find(|r| r.code == "RW-01-02-01")
            .expect("sector");
        sector.parent_code = Some("RW-01-02-01-01".to_string());
        let db = AdminDb::new(store);

        let report = db.audit();
        assert!(report
            .issues_of(IssueKind::InvalidParent)
            .any(|i| i.code == "RW-01-02-01"));
        let circular: Vec<&str> = report
            .issues_of(IssueKind::CircularReference)
            .map(|i| i.code.as_str())
            .collect();
        assert!(circular.contains(&"RW-01-02-01-01"));
        assert!(circular.contains(&"RW-01-02-01-01-01"));
    }

    #[test]
    fn cycle_of_wrong_level_links_is_circular() {
        let mut store = sample_store();
        for (code, parent) in [("RW-04-01", "RW-05-01"), ("RW-05-01", "RW-04-01")] {
            let district = store
                .districts
                .iter_mut()
                .find(|r| r.code == code)
                .expect("district");
            district.parent_code = Some(parent.to_string());
        }
        let db = AdminDb::new(store);

        let report = db.audit();
        for code in ["RW-04-01", "RW-05-01"] {
            assert!(report
                .issues_of(IssueKind::InvalidParent)
                .any(|i| i.code == code));
            assert!(report
                .issues_of(IssueKind::CircularReference)
                .any(|i| i.code == code));
        }
        assert_eq!(report.summary.circular_reference, 2);
        assert_eq!(report.summary.invalid_parent, 2);
    }

    #[test]
    fn missing_parent_code_and_province_with_parent() {
        let mut store = sample_store();
        store.sectors[0].parent_code = None;
        store.provinces[4].parent_code = Some("RW-01".to_string());
        let db = AdminDb::new(store);

        let report = db.audit();
        assert!(report
            .issues_of(IssueKind::MissingUnit)
            .any(|i| i.code == "RW-01-01-01"));
        assert!(report
            .issues_of(IssueKind::InvalidParent)
            .any(|i| i.code == "RW-05"));
    }

    #[test]
    fn duplicates_are_reported() {
        let mut store = sample_store();
        store
            .villages
            .push(record("RW-01-02-01-01-01", "Echo", "echo", Some("RW-01-02-01-01")));
        store.villages.push(record(
            "RW-01-02-01-01-09",
            "Kibaza",
            "kibaza",
            Some("RW-01-02-01-01"),
        ));
        let db = AdminDb::new(store);

        let report = db.audit();
        assert_eq!(report.summary.duplicate_code, 1);
        assert_eq!(report.summary.duplicate_slug, 1);
        let slug = report.issues_of(IssueKind::DuplicateSlug).next().unwrap();
        assert_eq!(slug.code, "RW-01-02-01-01-09");
        assert!(slug.message.contains("RW-01-02-01-02"));
    }
}
