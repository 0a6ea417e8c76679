//!
//! In-memory registry of stock records shared by the dashboard binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `RegistryError` used across the workspace.
//! - `result` — handy `Result<T, RegistryError>` alias.
//! - `record` — the `Record` value type and the record-file parser.
//! - `list` — `RecordList`, an insertion-ordered singly-linked list (newest first).
//! - `index` — `RecordIndex`, an unbalanced binary search tree keyed by symbol.
//! - `registry` — `Registry`, the façade that mutates both structures in lockstep.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod record;
pub mod list;
pub mod index;
pub mod registry;

pub use error::RegistryError;
pub use result::Result;
pub use record::Record;
pub use list::RecordList;
pub use index::RecordIndex;
pub use registry::Registry;
