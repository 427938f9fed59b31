//! Basic usage example for rwgeo-rs
//!
//! This example demonstrates how to:
//! - Load the administrative database
//! - Walk up and down the hierarchy
//! - Search by name, code prefix and fuzzy match
//! - Show province names in Kinyarwanda

use rwgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== RwGeo-RS Basic Usage Example ===\n");

    println!("Loading administrative database...");
    let db = AdminDb::<StandardBackend>::global()?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} units ({} provinces, {} villages)\n",
        stats.total(),
        stats.provinces,
        stats.villages
    );

    // Example 1: Provinces, in both languages
    println!("--- Example 1: Provinces ---");
    for province in db.units_at(Level::Province) {
        println!(
            "{}  {:<18} {}",
            province.code(),
            province.name(),
            province_display_name(province.name(), Language::Rw)
        );
    }
    println!();

    // Example 2: Lookup and ancestors
    println!("--- Example 2: Ancestor chain of a village ---");
    let village = "RW-01-02-01-01-01";
    for (depth, unit) in db.ancestor_chain(village).iter().enumerate() {
        println!("{}{} ({})", "  ".repeat(depth), unit.name(), unit.level());
    }
    println!();

    // Example 3: Children and siblings
    println!("--- Example 3: Sectors of Gasabo ---");
    for sector in db.direct_children("RW-01-02") {
        println!("- {} ({})", sector.name(), sector.code());
    }
    let siblings: Vec<&str> = db.siblings("RW-01-02").iter().map(|u| u.name()).collect();
    println!("Gasabo's sibling districts: {}", siblings.join(", "));
    println!();

    // Example 4: Searching
    println!("--- Example 4: Search ---");
    for unit in db.find_by_name("kamatamu") {
        println!("name contains 'kamatamu': {} {}", unit.level(), unit.code());
    }
    let prefixed = db.find_by_partial_code("RW-01-02-01", 5);
    println!("codes under RW-01-02-01 (max 5): {}", prefixed.len());
    for hit in db.fuzzy_by_name("Kimironco", 2, 3) {
        println!(
            "fuzzy 'Kimironco': {} (distance {}, score {:.2})",
            hit.unit.name(),
            hit.distance,
            hit.score
        );
    }
    println!();

    // Example 5: Suggestions
    println!("--- Example 5: Suggestions for 'gasabo' ---");
    for s in db.suggest("gasabo", 5) {
        println!(
            "{:?} match on {:?}: {} {}",
            s.match_type,
            s.field,
            s.unit.level(),
            s.unit.code()
        );
    }

    Ok(())
}
