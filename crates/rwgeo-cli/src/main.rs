//! rwgeo: command-line interface for rwgeo-core
//!
//! Inspect and audit the administrative hierarchy from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Unit counts per level
//!   $ rwgeo stats
//!
//! - Walk up from a village, with Kinyarwanda province names
//!   $ rwgeo --lang rw ancestors RW-01-02-01-01-01
//!
//! - Search
//!   $ rwgeo search kacyiru
//!   $ rwgeo fuzzy remra --max-distance 2
//!   $ rwgeo --json suggest kimi
//!
//! - Integrity checks
//!   $ rwgeo check-pair RW-01 RW-01-02-01-01-01
//!   $ rwgeo audit
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `$RWGEO_DATA_DIR`, falling back to the sample
//! dataset bundled with `rwgeo-core`. Use `--data <path>` to point at another
//! directory, a `.bin` snapshot or a single JSON file. Set `RUST_LOG=debug`
//! to see what the loader reads.
mod args;
mod render;

use crate::args::{CliArgs, Commands, Query};
use crate::render::Printer;
use anyhow::Context;
use clap::Parser;
use rwgeo_core::lang::canonical_province_name;
use rwgeo_core::{AdminDb, DefaultAdminDb, StandardBackend};
use std::path::Path;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let out = Printer::new(args.json, args.lang);

    match args.command {
        #[cfg(feature = "builder")]
        Commands::Build {
            out: target,
            no_compress,
        } => build(args.data.as_deref(), target.as_deref(), no_compress, &out),
        Commands::Query(query) => {
            let db = load(args.data.as_deref())?;
            run(&db, query, &out)
        }
    }
}

fn run(db: &DefaultAdminDb, query: Query, out: &Printer) -> anyhow::Result<ExitCode> {
    match query {
        Query::Stats => out.stats(&db.stats())?,

        Query::Get { code } => match db.lookup(&code) {
            Some(unit) => out.unit(&unit)?,
            None => {
                eprintln!("No unit found for: {code}");
                return Ok(ExitCode::FAILURE);
            }
        },

        Query::List { level } => out.units(&db.units_at(level).collect::<Vec<_>>())?,

        Query::Ancestors { code } => out.chain(&db.ancestor_chain(&code))?,

        Query::Children { code } => out.units(&db.direct_children(&code))?,

        Query::Siblings { code } => out.units(&db.siblings(&code))?,

        Query::Descendants { code } => out.units(&db.descendants(&code))?,

        Query::Search { text, slug } => {
            let hits = if slug {
                db.find_by_slug(&text)
            } else {
                db.find_by_name(name_query(&text))
            };
            out.units(&hits)?
        }

        Query::Code { prefix, limit } => out.units(&db.find_by_partial_code(&prefix, limit))?,

        Query::Fuzzy {
            query,
            max_distance,
            limit,
        } => out.fuzzy(&db.fuzzy_by_name(&query, max_distance, limit))?,

        Query::Suggest { query, limit } => out.suggestions(&db.suggest(&query, limit))?,

        Query::CheckCode { code } => {
            let check = db.validate_code_format(&code);
            out.code_check(&code, &check)?;
            if !check.valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Query::CheckPair { parent, child } => {
            let check = db.validate_parent_child(&parent, &child);
            out.pair_check(&parent, &child, &check)?;
            if !check.valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Query::Audit => {
            let report = db.audit();
            out.audit(&report)?;
            if !report.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Province names are stored in English; a Kinyarwanda province name is
/// searched under its stored name.
fn name_query(text: &str) -> &str {
    canonical_province_name(text).unwrap_or(text)
}

fn load(data: Option<&Path>) -> anyhow::Result<DefaultAdminDb> {
    let path = data
        .map(Path::to_path_buf)
        .unwrap_or_else(AdminDb::<StandardBackend>::default_data_dir);
    tracing::debug!(path = %path.display(), "loading dataset");
    let db = AdminDb::load_from_path(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    tracing::debug!(units = db.stats().total(), "dataset ready");
    Ok(db)
}

#[cfg(feature = "builder")]
fn build(
    data: Option<&Path>,
    target: Option<&Path>,
    no_compress: bool,
    out: &Printer,
) -> anyhow::Result<ExitCode> {
    use rwgeo_core::loader::builder::{build_snapshot, CompressionMode};

    let source = data
        .map(Path::to_path_buf)
        .unwrap_or_else(AdminDb::<StandardBackend>::default_data_dir);
    let compression = if no_compress {
        CompressionMode::None
    } else {
        CompressionMode::default()
    };
    tracing::debug!(source = %source.display(), ?compression, "building snapshot");
    let written = build_snapshot(&source, target, compression)
        .with_context(|| format!("failed to build snapshot from {}", source.display()))?;
    out.message(&format!("snapshot written to {}", written.display()))?;
    Ok(ExitCode::SUCCESS)
}
