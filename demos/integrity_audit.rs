//! Integrity audit example for rwgeo-rs
//!
//! Loads a dataset, breaks it on purpose and shows what the validator
//! reports. Pass a dataset path as the first argument to audit your own data.

use rwgeo_rs::prelude::*;
use rwgeo_rs::{AuditReport, RecordStore};

fn print_report(title: &str, report: &AuditReport) {
    println!("--- {title} ---");
    println!(
        "valid: {}  units: {}  issues: {}",
        report.valid,
        report.summary.total_units,
        report.summary.issues()
    );
    for issue in &report.issues {
        println!("  [{:?}] {}: {}", issue.kind, issue.code, issue.message);
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== RwGeo-RS Integrity Audit Example ===\n");

    let db = match std::env::args().nth(1) {
        Some(path) => AdminDb::<StandardBackend>::load_from_path(path)?,
        None => AdminDb::<StandardBackend>::load()?,
    };
    print_report("Dataset as loaded", &db.audit());

    // Format and pair checks never need the data to be broken.
    for code in ["RW-01-02", "RW-D-0102", "rw-05-01-01"] {
        let check = db.validate_code_format(code);
        println!("{code:<12} valid={} level={:?}", check.valid, check.level);
    }
    let pair = db.validate_parent_child("RW-01", "RW-01-02-01-01-01");
    println!("RW-01 -> RW-01-02-01-01-01: {:?}\n", pair.reason);

    // Break it: orphan a district and create a parent cycle.
    let mut store: RecordStore<StandardBackend> = db.into_store();
    if let Some(district) = store.districts.first_mut() {
        district.parent_code = Some("RW-42".to_string());
    }
    let first_cell = store.cells.first().map(|c| c.code.clone());
    if let (Some(sector), Some(cell)) = (store.sectors.first_mut(), first_cell) {
        sector.parent_code = Some(cell);
    }

    let broken = AdminDb::new(store);
    let report = broken.audit();
    print_report("After injecting defects", &report);

    for kind in [IssueKind::Orphaned, IssueKind::CircularReference] {
        println!("{kind:?}: {}", report.issues_of(kind).count());
    }

    Ok(())
}
