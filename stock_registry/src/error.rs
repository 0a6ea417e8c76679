//! Error types shared by the registry and the dashboard.
//!
//! The data structures themselves never fail: a missing symbol is reported as
//! `false`/`None` and duplicate inserts are ignored. `RegistryError` covers the
//! surrounding I/O layer instead: reading record files, parsing operator input
//! and rendering records as JSON.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the dashboard binary.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// I/O error originating from the standard library (stdin/stdout, files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// A line of a record file could not be turned into a `Record`.
    #[error("Parse records file error at line {line}: {reason}")]
    ParseRecordsFile {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The operator picked a menu entry that does not exist.
    #[error("Invalid menu choice: {0}")]
    InvalidChoice(String),
}
