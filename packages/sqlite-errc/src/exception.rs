//! SQLite failure objects.

use thiserror::Error;

use crate::category::{category, ErrorCategory};

/// Value of an error code accessor that carries no code.
pub const NOT_SET: i32 = -1;

/// An error carrying a SQLite basic and extended result code.
pub trait SqliteFailure {
    /// Basic result code, or [`NOT_SET`].
    fn error_code(&self) -> i32;

    /// Extended result code, or [`NOT_SET`].
    fn extended_error_code(&self) -> i32;
}

/// Failure reported by a SQLite operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Exception {
    message: String,
    error_code: i32,
    extended_error_code: i32,
}

impl Exception {
    /// Creates an exception that carries no result code.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_codes(message, NOT_SET, NOT_SET)
    }

    /// Creates an exception carrying a basic and an extended result code.
    pub fn with_codes(
        message: impl Into<String>,
        error_code: i32,
        extended_error_code: i32,
    ) -> Self {
        Self {
            message: message.into(),
            error_code,
            extended_error_code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Label of the basic result code.
    pub fn error_str(&self) -> &'static str {
        category().message(self.error_code)
    }
}

impl SqliteFailure for Exception {
    fn error_code(&self) -> i32 {
        self.error_code
    }

    fn extended_error_code(&self) -> i32 {
        self.extended_error_code
    }
}
