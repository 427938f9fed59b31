use clap::{Parser, Subcommand};
use rwgeo_core::{Language, Level};
use std::path::PathBuf;

/// CLI arguments for rwgeo
#[derive(Debug, Parser)]
#[command(
    name = "rwgeo",
    version,
    about = "Query and audit Rwanda's administrative hierarchy"
)]
pub struct CliArgs {
    /// Dataset directory, `.bin` snapshot or single JSON file
    /// (default: $RWGEO_DATA_DIR, else the bundled sample data)
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<PathBuf>,

    /// Language for province names in text output (en, rw)
    #[arg(short = 'l', long = "lang", global = true, default_value = "en")]
    pub lang: Language,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Query(Query),

    /// Write a binary snapshot of the JSON dataset
    #[cfg(feature = "builder")]
    Build {
        /// Output file (default: <data>/rwgeo.bin)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
        /// Write an uncompressed snapshot
        #[arg(long)]
        no_compress: bool,
    },
}

/// Commands that run against a loaded database.
#[derive(Debug, Subcommand)]
pub enum Query {
    /// Show unit counts per level
    Stats,

    /// Lookup a unit by its exact code
    Get { code: String },

    /// List all units of one level
    List {
        /// province, district, sector, cell or village
        level: Level,
    },

    /// Path from the province down to a unit
    Ancestors { code: String },

    /// Direct children of a unit
    Children { code: String },

    /// Units sharing the same parent
    Siblings { code: String },

    /// Every unit below a unit, breadth first
    Descendants { code: String },

    /// Substring search on names (or slugs); Kinyarwanda province names
    /// are accepted
    Search {
        text: String,
        /// Search slugs instead of names
        #[arg(long)]
        slug: bool,
    },

    /// Units whose code starts with a prefix
    Code {
        prefix: String,
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Typo-tolerant name search
    Fuzzy {
        query: String,
        #[arg(short = 'm', long = "max-distance", default_value_t = 2)]
        max_distance: usize,
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Ranked suggestions across names, codes and slugs
    Suggest {
        query: String,
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Check whether a string is a well-formed code
    CheckCode { code: String },

    /// Check a parent/child pair
    CheckPair { parent: String, child: String },

    /// Scan the dataset for structural defects (exit code 1 if any)
    Audit,
}
