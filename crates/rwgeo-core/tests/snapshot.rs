#![cfg(feature = "builder")]

use rwgeo_core::loader::builder::{build_snapshot, write_snapshot, CompressionMode};
use rwgeo_core::loader::SNAPSHOT_FILENAME;
use rwgeo_core::prelude::*;
use std::fs;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn assert_same_units(a: &DefaultAdminDb, b: &DefaultAdminDb) {
    assert_eq!(a.stats(), b.stats());
    for (x, y) in a.units().zip(b.units()) {
        assert_eq!(x, y);
        assert_eq!(x.name(), y.name());
        assert_eq!(x.slug(), y.slug());
        assert_eq!(x.parent_code(), y.parent_code());
        assert_eq!(x.center(), y.center());
    }
}

#[test]
fn snapshot_round_trip_preserves_every_unit() {
    let json = AdminDb::load_from_path(data_dir()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let modes = [
        ("plain.bin", CompressionMode::None),
        ("default.bin", CompressionMode::default()),
    ];
    for (name, mode) in modes {
        let path = dir.path().join(name);
        write_snapshot(&path, json.store(), mode).unwrap();
        let snap = AdminDb::load_from_path(&path).unwrap();
        assert_same_units(&json, &snap);
        assert!(snap.audit().valid);
    }
}

#[test]
fn save_as_writes_a_loadable_snapshot() {
    let json = AdminDb::load_from_path(data_dir()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.bin");

    json.save_as(&path).unwrap();
    assert_same_units(&json, &AdminDb::load_from_path(&path).unwrap());
}

#[test]
fn directory_prefers_a_fresh_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    for level in Level::ALL {
        let name = format!("{}.json", level.collection());
        fs::copy(data_dir().join(&name), dir.path().join(&name)).unwrap();
    }

    let out = build_snapshot(dir.path(), None, CompressionMode::default()).unwrap();
    assert_eq!(out, dir.path().join(SNAPSHOT_FILENAME));

    // Without the JSON files only the snapshot can answer.
    for level in Level::ALL {
        fs::remove_file(dir.path().join(format!("{}.json", level.collection()))).unwrap();
    }
    let db = AdminDb::load_from_path(dir.path()).unwrap();
    assert_eq!(db.stats().provinces, 5);
    assert!(db.lookup("RW-01-02").is_some());
}

#[test]
fn corrupt_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.bin");
    fs::write(&path, b"not a snapshot").unwrap();
    assert!(AdminDb::load_from_path(&path).is_err());
}
