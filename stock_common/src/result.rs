//! Result type alias shared across the workspace.
//!
//! Functions can simply return `Result<T>`; the error type defaults to the
//! common `LookupError`.
use crate::error::LookupError;

/// Workspace-wide `Result` alias with `LookupError` as the default error.
pub type Result<T, E = LookupError> = std::result::Result<T, E>;
