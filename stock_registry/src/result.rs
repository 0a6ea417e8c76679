//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `RegistryError`, so functions can simply return `Result<T>`.
use crate::error::RegistryError;

/// Workspace-wide `Result` alias with `RegistryError` as the default error.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
