// crates/rwgeo-core/src/text.rs

//! Text folding and edit distance used by the search engine.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Kacyirú` -> `Kacyiru`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use rwgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Nyarugenge"), "nyarugenge");
/// assert_eq!(fold_key("Kacyirú"), "kacyiru");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Levenshtein edit distance between `a` and `b`, counted in characters.
///
/// Insertion, deletion and substitution each cost 1.
///
/// ```rust
/// use rwgeo_core::text::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity in `[0, 1]` derived from an edit distance:
/// `1 − distance / max(len(a), len(b))`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(distance: usize, a_len: usize, b_len: usize) -> f64 {
    let longest = a_len.max(b_len);
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / longest as f64
}
