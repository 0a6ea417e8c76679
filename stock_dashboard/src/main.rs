//! Stock Dashboard — an interactive console front end for the stock registry.
//!
//! The binary keeps every record in memory for the lifetime of the process. Each
//! added stock goes into two structures at once: an insertion-ordered list (used
//! for search and the "all"/"latest" listings) and a binary search tree keyed by
//! symbol (used for the sorted listing).
//!
//! Usage example (CLI):
//! ```bash
//! stock_dashboard --seed ./stocks.txt --format text
//! ```
//!
//! The optional seed file holds one `SYMBOL PRICE VOLUME` entry per line.
//! Logs go to stderr; set `RUST_LOG=debug` to trace every structure mutation.
#![warn(missing_docs)]
mod args;
mod dashboard;
mod menu;
mod render;

use crate::args::Args;
use crate::dashboard::Dashboard;
use clap::Parser;
use log::{error, info};
use stock_registry::Registry;
use stock_registry::RegistryError;
use stock_registry::Result;
use stock_registry::record::{Record, RecordParser};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

fn main() -> Result<(), RegistryError> {
    init_logger();
    let args = Args::parse();

    let mut registry = Registry::new();
    if let Some(seed) = &args.seed {
        let path = normalize_path(seed);
        if let Err(e) = load_seed(&mut registry, &path) {
            error!("Failed to load seed file {}: {}", path.display(), e);
            return Err(e);
        }
    }

    info!("Dashboard started with {} record(s), format {}", registry.list().len(), args.format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut dashboard = Dashboard::new(registry, stdin.lock(), stdout.lock(), args.format);
    dashboard.run()
}

fn load_seed(registry: &mut Registry, path: &Path) -> Result<usize, RegistryError> {
    if !is_file_exist(path) {
        return Err(RegistryError::Format(format!(
            "seed file {} does not exist",
            path.display()
        )));
    }
    let file = File::open(path)?;
    let records = Record::parse_from_reader(BufReader::new(file))?;
    Ok(registry.load_records(records))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
