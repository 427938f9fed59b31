// crates/rwgeo-core/src/traits.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the record store.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so record stores can be
/// snapshotted via bincode.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
    /// Convert an `f64` into the backend float representation.
    fn float_from(f: f64) -> Self::Float;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// Convert backend float to plain `f64`.
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

/// Convenient alias used in demos and the CLI.
pub type StandardBackend = DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use rwgeo_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kacyiru").is_named("KACYIRU"));
/// assert!(Place("Nyarugenge").name_contains("rugen"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
