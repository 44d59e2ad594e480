//! Conversion error types.

use thiserror::Error;

/// An integer that is not a SQLite result code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown SQLite result code {0}")]
pub struct UnknownResultCode(pub i32);
