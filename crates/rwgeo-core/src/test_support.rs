// crates/rwgeo-core/src/test_support.rs

//! Small, well-formed record store shared by the unit tests.
//!
//! Mirrors the bundled `data/` sample: five provinces, Gasabo district
//! (Kigali City) in depth, one chain per other province.

use crate::model::{Record, RecordStore, Unit};
use crate::traits::{DefaultBackend, GeoBackend};

pub(crate) fn record(
    code: &str,
    name: &str,
    slug: &str,
    parent: Option<&str>,
) -> Record<DefaultBackend> {
    Record {
        code: code.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        parent_code: parent.map(str::to_string),
        center: None,
    }
}

fn rows(rows: &[(&str, &str, &str)]) -> Vec<Record<DefaultBackend>> {
    rows.iter()
        .map(|&(code, name, slug)| record(code, name, slug, parent_code(code).as_deref()))
        .collect()
}

/// Parent code by dropping the last segment; provinces have none.
fn parent_code(code: &str) -> Option<String> {
    let (head, _) = code.rsplit_once('-')?;
    (head != "RW").then(|| head.to_string())
}

pub(crate) fn sample_store() -> RecordStore<DefaultBackend> {
    RecordStore {
        provinces: rows(&[
            ("RW-01", "Kigali City", "kigali-city"),
            ("RW-02", "Southern Province", "southern-province"),
            ("RW-03", "Western Province", "western-province"),
            ("RW-04", "Northern Province", "northern-province"),
            ("RW-05", "Eastern Province", "eastern-province"),
        ]),
        districts: rows(&[
            ("RW-01-01", "Nyarugenge", "nyarugenge"),
            ("RW-01-02", "Gasabo", "gasabo"),
            ("RW-01-03", "Kicukiro", "kicukiro"),
            ("RW-02-01", "Huye", "huye"),
            ("RW-03-01", "Rubavu", "rubavu"),
            ("RW-04-01", "Musanze", "musanze"),
            ("RW-05-01", "Nyagatare", "nyagatare"),
        ]),
        sectors: rows(&[
            ("RW-01-01-01", "Nyamirambo", "nyamirambo"),
            ("RW-01-02-01", "Kacyiru", "kacyiru"),
            ("RW-01-02-02", "Kimironko", "kimironko"),
            ("RW-01-02-03", "Remera", "remera"),
            ("RW-01-03-01", "Gikondo", "gikondo"),
            ("RW-02-01-01", "Tumba", "tumba"),
        ]),
        cells: rows(&[
            ("RW-01-01-01-01", "Rugarama", "rugarama"),
            ("RW-01-02-01-01", "Kamatamu", "kamatamu"),
            ("RW-01-02-01-02", "Kibaza", "kibaza"),
            ("RW-01-02-02-01", "Bibare", "bibare"),
            ("RW-01-02-03-01", "Rukiri I", "rukiri-i"),
            ("RW-02-01-01-01", "Cyarwa", "cyarwa"),
        ]),
        villages: rows(&[
            ("RW-01-01-01-01-01", "Kamatamu", "kamatamu-rugarama"),
            ("RW-01-02-01-01-01", "Amajyambere", "amajyambere"),
            ("RW-01-02-01-01-02", "Cyimana", "cyimana"),
            ("RW-01-02-01-02-01", "Gasabo", "gasabo-kibaza"),
            ("RW-01-02-02-01-01", "Ingenzi", "ingenzi"),
            ("RW-01-02-03-01-01", "Amahoro", "amahoro"),
            ("RW-02-01-01-01-01", "Karubanda", "karubanda"),
        ]),
    }
}

pub(crate) fn codes<'a, B: GeoBackend>(units: &[Unit<'a, B>]) -> Vec<&'a str> {
    units.iter().map(|u| u.code()).collect()
}
