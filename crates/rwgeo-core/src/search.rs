// crates/rwgeo-core/src/search.rs

//! # Search Engine
//!
//! Three independent strategies over the full unit set, plus a blended
//! suggestion ranking:
//!
//! - substring match on name or slug
//! - code prefix match
//! - Levenshtein fuzzy match on name
//!
//! All text comparison is case-insensitive via [`fold_key`]. Linear scans are
//! fine here: the dataset is ~17k records and no secondary text index is kept.
//! Empty queries and a zero `limit` return nothing.

use crate::index::AdminDb;
use crate::model::Unit;
use crate::text::{fold_key, levenshtein, similarity};
use crate::traits::{GeoBackend, NameMatch};
use serde::Serialize;
use std::cmp::Ordering;

/// Largest name edit distance [`AdminDb::suggest`] still reports as fuzzy.
pub const SUGGEST_FUZZY_DISTANCE: usize = 3;

/// How a suggestion matched. Variant order is ranking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Partial,
    Fuzzy,
}

/// Which field of the unit produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Name,
    Code,
    Slug,
}

/// Result of [`AdminDb::fuzzy_by_name`].
#[derive(Debug, Clone, Serialize)]
pub struct FuzzyHit<'a, B: GeoBackend> {
    pub unit: Unit<'a, B>,
    /// Edit distance between the folded query and the folded name.
    pub distance: usize,
    /// `1 − distance / max(len(query), len(name))`.
    pub score: f64,
}

/// Result of [`AdminDb::suggest`].
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion<'a, B: GeoBackend> {
    pub unit: Unit<'a, B>,
    pub match_type: MatchType,
    pub field: MatchField,
    /// Name edit distance, only for fuzzy suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    /// Name similarity as in [`FuzzyHit::score`], only for fuzzy suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Trimmed, folded query; `None` when nothing is left to search for.
fn normalize_query(query: &str) -> Option<String> {
    let q = fold_key(query.trim());
    (!q.is_empty()).then_some(q)
}

/// Deterministic order for equally ranked units: folded name, then depth,
/// then code.
fn tie_break<B: GeoBackend>(a: (&str, &Unit<'_, B>), b: (&str, &Unit<'_, B>)) -> Ordering {
    a.0.cmp(b.0)
        .then_with(|| a.1.level().cmp(&b.1.level()))
        .then_with(|| a.1.code().cmp(b.1.code()))
}

impl<B: GeoBackend> AdminDb<B> {
    /// Units whose name contains `text`, case-insensitive, in store order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rwgeo_core::{AdminDb, DefaultBackend};
    ///
    /// let db = AdminDb::<DefaultBackend>::global().unwrap();
    /// for unit in db.find_by_name("kacyiru") {
    ///     println!("{} {} ({})", unit.code(), unit.name(), unit.level());
    /// }
    /// ```
    pub fn find_by_name(&self, text: &str) -> Vec<Unit<'_, B>> {
        let Some(q) = normalize_query(text) else {
            return Vec::new();
        };
        self.units().filter(|u| u.name_contains(&q)).collect()
    }

    /// Units whose slug contains `text`, case-insensitive, in store order.
    pub fn find_by_slug(&self, text: &str) -> Vec<Unit<'_, B>> {
        let Some(q) = normalize_query(text) else {
            return Vec::new();
        };
        self.units()
            .filter(|u| fold_key(u.slug()).contains(&q))
            .collect()
    }

    /// Up to `limit` units whose code starts with `prefix`, in store order.
    ///
    /// The prefix is trimmed and compared case-insensitively. An empty prefix
    /// matches nothing.
    pub fn find_by_partial_code(&self, prefix: &str, limit: usize) -> Vec<Unit<'_, B>> {
        let prefix = prefix.trim().to_ascii_uppercase();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        self.units()
            .filter(|u| u.code().to_ascii_uppercase().starts_with(&prefix))
            .take(limit)
            .collect()
    }

    /// Units whose name is within `max_distance` edits of `query`, best first.
    ///
    /// Ranked by descending score; equal scores fall back to name, level and
    /// code so the order is stable across runs. `max_distance = 0` keeps only
    /// exact (case-insensitive) name matches.
    pub fn fuzzy_by_name(
        &self,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Vec<FuzzyHit<'_, B>> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(q) = normalize_query(query) else {
            return Vec::new();
        };
        let q_len = q.chars().count();

        let mut hits: Vec<(String, FuzzyHit<'_, B>)> = self
            .units()
            .filter_map(|unit| {
                let name = fold_key(unit.name());
                let distance = levenshtein(&q, &name);
                if distance > max_distance {
                    return None;
                }
                let score = similarity(distance, q_len, name.chars().count());
                Some((name, FuzzyHit { unit, distance, score }))
            })
            .collect();

        hits.sort_by(|(an, a), (bn, b)| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| tie_break((an.as_str(), &a.unit), (bn.as_str(), &b.unit)))
        });
        hits.truncate(limit);
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    /// Blended, typed suggestions for a free-text query.
    ///
    /// Each unit is classified by its best match:
    /// - **exact**: name, code or slug equals the query
    /// - **partial**: name, code or slug contains the query
    /// - **fuzzy**: name within [`SUGGEST_FUZZY_DISTANCE`] edits, tried only
    ///   when neither of the above matched
    ///
    /// Within a tier the first matching field wins in the order name, code,
    /// slug. Results are ranked exact, partial, fuzzy; ties are broken
    /// alphabetically by name, then by level and code.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion<'_, B>> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(q) = normalize_query(query) else {
            return Vec::new();
        };

        let q_len = q.chars().count();
        let mut out: Vec<(String, Suggestion<'_, B>)> = Vec::new();
        for unit in self.units() {
            let name = fold_key(unit.name());
            let fields = [
                (MatchField::Name, name.clone()),
                (MatchField::Code, fold_key(unit.code())),
                (MatchField::Slug, fold_key(unit.slug())),
            ];

            let classified = fields
                .iter()
                .find(|(_, v)| *v == q)
                .map(|(f, _)| (MatchType::Exact, *f, None, None))
                .or_else(|| {
                    fields
                        .iter()
                        .find(|(_, v)| v.contains(&q))
                        .map(|(f, _)| (MatchType::Partial, *f, None, None))
                })
                .or_else(|| {
                    let distance = levenshtein(&q, &name);
                    (distance <= SUGGEST_FUZZY_DISTANCE).then(|| {
                        let score = similarity(distance, q_len, name.chars().count());
                        (MatchType::Fuzzy, MatchField::Name, Some(distance), Some(score))
                    })
                });

            if let Some((match_type, field, distance, score)) = classified {
                out.push((
                    name,
                    Suggestion {
                        unit,
                        match_type,
                        field,
                        distance,
                        score,
                    },
                ));
            }
        }

        out.sort_by(|(an, a), (bn, b)| {
            a.match_type
                .cmp(&b.match_type)
                .then_with(|| tie_break((an.as_str(), &a.unit), (bn.as_str(), &b.unit)))
        });
        out.truncate(limit);
        out.into_iter().map(|(_, s)| s).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::test_support::{codes, sample_store};

    fn db() -> AdminDb<crate::DefaultBackend> {
        AdminDb::new(sample_store())
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let db = db();
        let hits = db.find_by_name("MATAMU");
        assert_eq!(codes(&hits), ["RW-01-02-01-01", "RW-01-01-01-01-01"]);
        assert!(db.find_by_name("   ").is_empty());
        assert!(db.find_by_name("zzz").is_empty());
    }

    #[test]
    fn slug_search_matches_hyphenated_slugs() {
        let db = db();
        let hits = db.find_by_slug("gasabo");
        assert_eq!(codes(&hits), ["RW-01-02", "RW-01-02-01-02-01"]);
        assert_eq!(codes(&db.find_by_slug("-province")).len(), 4);
    }

    #[test]
    fn partial_code_is_a_capped_prefix_in_store_order() {
        let db = db();
        let hits = db.find_by_partial_code("rw-01-02", 4);
        assert_eq!(
            codes(&hits),
            ["RW-01-02", "RW-01-02-01", "RW-01-02-02", "RW-01-02-03"]
        );
        assert_eq!(db.find_by_partial_code("RW-01-02", 100).len(), 13);
        assert!(db.find_by_partial_code("RW", 0).is_empty());
        assert!(db.find_by_partial_code("01-02", 10).is_empty());
    }

    #[test]
    fn empty_code_prefix_matches_nothing() {
        assert!(db().find_by_partial_code("", 100).is_empty());
        assert!(db().find_by_partial_code("  ", 100).is_empty());
    }

    #[test]
    fn zero_distance_fuzzy_is_exact_name_match() {
        let db = db();
        let hits = db.fuzzy_by_name("gasabo", 0, 10);
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!(hit.unit.is_named("Gasabo"));
            assert_eq!(hit.distance, 0);
            assert_eq!(hit.score, 1.0);
        }
        // Same score: tie broken by level, district before village.
        assert_eq!(hits[0].unit.level(), Level::District);
    }

    #[test]
    fn fuzzy_ranks_by_score_and_respects_limit() {
        let db = db();
        let hits = db.fuzzy_by_name("kimironco", 2, 10);
        assert_eq!(hits[0].unit.code(), "RW-01-02-02");
        assert_eq!(hits[0].distance, 1);

        let hits = db.fuzzy_by_name("kamatam", 3, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].unit.name(), "Kamatamu");
        assert_eq!(hits[0].unit.level(), Level::Cell);

        assert!(db.fuzzy_by_name("kamatamu", 3, 0).is_empty());
        assert!(db.fuzzy_by_name("", 3, 10).is_empty());
    }

    #[test]
    fn fuzzy_scores_never_increase_down_the_list() {
        let db = db();
        let hits = db.fuzzy_by_name("remera", 6, 100);
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn fuzzy_score_falls_with_distance_at_fixed_length() {
        // Same normalising length (7), so only the distance moves the score.
        let db = db();
        let hits = db.fuzzy_by_name("gikondo", 7, 100);
        let gikondo = hits.iter().find(|h| h.unit.name() == "Gikondo").expect("exact");
        let longer = hits
            .iter()
            .filter(|h| h.unit.name().chars().count() == 7 && h.distance > 0);
        for other in longer {
            assert!(gikondo.score > other.score);
        }
    }

    #[test]
    fn suggest_ranks_exact_then_partial_then_fuzzy() {
        let db = db();
        let suggestions = db.suggest("gasabo", 20);
        let types: Vec<MatchType> = suggestions.iter().map(|s| s.match_type).collect();
        let mut sorted = types.clone();
        sorted.sort();
        assert_eq!(types, sorted);

        let first = &suggestions[0];
        assert_eq!(first.unit.code(), "RW-01-02");
        assert_eq!(first.match_type, MatchType::Exact);
        assert_eq!(first.field, MatchField::Name);

        // The village "Gasabo" is an exact name match too.
        assert_eq!(suggestions[1].unit.code(), "RW-01-02-01-02-01");
        assert_eq!(suggestions[1].match_type, MatchType::Exact);
    }

    #[test]
    fn suggest_reports_the_matching_field() {
        let db = db();
        let by_code = db.suggest("rw-05-01", 5);
        assert_eq!(by_code[0].unit.name(), "Nyagatare");
        assert_eq!(by_code[0].match_type, MatchType::Exact);
        assert_eq!(by_code[0].field, MatchField::Code);

        let by_slug = db.suggest("kibaza", 5);
        let village = by_slug
            .iter()
            .find(|s| s.unit.code() == "RW-01-02-01-02-01")
            .expect("slug gasabo-kibaza");
        assert_eq!(village.match_type, MatchType::Partial);
        assert_eq!(village.field, MatchField::Slug);
    }

    #[test]
    fn suggest_falls_back_to_fuzzy_with_distance() {
        let db = db();
        let suggestions = db.suggest("remra", 10);
        let remera = suggestions
            .iter()
            .find(|s| s.unit.code() == "RW-01-02-03")
            .expect("remera");
        assert_eq!(remera.match_type, MatchType::Fuzzy);
        assert_eq!(remera.distance, Some(1));
    }

    #[test]
    fn suggest_ties_are_alphabetical() {
        let db = db();
        let partial: Vec<&str> = db
            .suggest("province", 10)
            .iter()
            .map(|s| s.unit.name())
            .collect();
        assert_eq!(
            partial,
            [
                "Eastern Province",
                "Northern Province",
                "Southern Province",
                "Western Province"
            ]
        );
    }

    #[test]
    fn suggest_short_circuits() {
        let db = db();
        assert!(db.suggest("gasabo", 0).is_empty());
        assert!(db.suggest("", 10).is_empty());
        assert_eq!(db.suggest("gasabo", 1).len(), 1);
    }
}
