//! Error categories.
//!
//! A category names a family of error codes, labels each code and classifies
//! it into a [`Condition`]. [`SqliteCategory`] is the category for SQLite
//! result codes; there is exactly one instance per process, reached through
//! [`category()`].

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::condition::{classify, Condition};
use crate::error_code::ErrorCode;
use crate::result_code::ResultCode;

/// Display name of the SQLite category.
///
/// Codes of different categories compare unequal, so this name is part of
/// every [`ErrorCode`]'s identity.
pub const CATEGORY_NAME: &str = "SQLite Exception";

/// Message returned for integers that are not SQLite result codes.
pub const UNKNOWN_MESSAGE: &str = "unknown sqlite exception";

/// A family of related error codes.
///
/// Every method must be total: any `i32` is a valid argument.
pub trait ErrorCategory: Send + Sync + 'static {
    /// Display name identifying the category.
    fn name(&self) -> &'static str;

    /// Human-readable message for `code`.
    fn message(&self, code: i32) -> &'static str;

    /// Portable condition `code` belongs to.
    fn default_condition(&self, code: i32) -> Condition;

    /// Returns true if `code` falls under `condition`.
    fn equivalent(&self, code: i32, condition: &Condition) -> bool {
        self.default_condition(code) == *condition
    }
}

impl fmt::Debug for dyn ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    message: &'static str,
    condition: Condition,
}

/// Category for SQLite result codes.
///
/// The lookup table behind it is built once, on first lookup.
#[derive(Debug)]
pub struct SqliteCategory {
    _private: (),
}

static CATEGORY: SqliteCategory = SqliteCategory { _private: () };

static ENTRIES: LazyLock<HashMap<i32, Entry>> = LazyLock::new(build_entries);

/// Returns the process-wide SQLite category.
pub fn category() -> &'static SqliteCategory {
    &CATEGORY
}

fn build_entries() -> HashMap<i32, Entry> {
    let entries: HashMap<i32, Entry> = ResultCode::ALL
        .iter()
        .map(|&code| {
            let entry = Entry {
                message: code.label(),
                condition: classify(code),
            };
            (code.code(), entry)
        })
        .collect();

    tracing::debug!(
        "Built {} category with {} result codes",
        CATEGORY_NAME,
        entries.len()
    );

    entries
}

impl SqliteCategory {
    /// Number of result codes known to the category.
    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    /// Returns true if the category knows no result codes.
    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }

    /// Returns true if `code` is a SQLite result code.
    pub fn contains(&self, code: i32) -> bool {
        ENTRIES.contains_key(&code)
    }
}

impl ErrorCategory for SqliteCategory {
    fn name(&self) -> &'static str {
        CATEGORY_NAME
    }

    fn message(&self, code: i32) -> &'static str {
        ENTRIES
            .get(&code)
            .map_or(UNKNOWN_MESSAGE, |entry| entry.message)
    }

    fn default_condition(&self, code: i32) -> Condition {
        // Integers outside the table have no class of their own either.
        ENTRIES.get(&code).map_or_else(
            || Condition::Specific(ErrorCode::from_sqlite(code)),
            |entry| entry.condition,
        )
    }
}
