//! Command-line arguments for the Stock Dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use crate::render::OutputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a record file to load before the menu starts.
    /// One `SYMBOL PRICE VOLUME` entry per line; commas or spaces separate fields.
    #[clap(long)]
    pub seed: Option<String>,

    /// How records are printed.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
