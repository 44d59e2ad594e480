//! Categorized error codes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::category::{category, ErrorCategory};
use crate::condition::Condition;
use crate::result_code::ResultCode;

/// An integer error value paired with the category that interprets it.
///
/// Two codes are equal when they carry the same value in the same category.
/// `ErrorCode::default()` is the empty code: `ResultCode::Ok` in the SQLite
/// category.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: i32,
    category: &'static dyn ErrorCategory,
}

impl ErrorCode {
    /// Creates a code from a raw value and its category.
    pub fn new(value: i32, category: &'static dyn ErrorCategory) -> Self {
        Self { value, category }
    }

    /// Wraps a raw SQLite value, known or not.
    pub fn from_sqlite(value: i32) -> Self {
        Self::new(value, category())
    }

    /// The empty/no-error code.
    pub fn success() -> Self {
        ResultCode::Ok.into()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &'static str {
        self.category.message(self.value)
    }

    pub fn default_condition(&self) -> Condition {
        self.category.default_condition(self.value)
    }

    /// Returns true if the code is the empty/no-error code.
    pub fn is_ok(&self) -> bool {
        self.value == 0
    }

    /// Returns true if the code falls under `condition`.
    pub fn matches(&self, condition: &Condition) -> bool {
        self.category.equivalent(self.value, condition)
    }

    /// The SQLite result code, if this is a known code of the SQLite category.
    pub fn result_code(&self) -> Option<ResultCode> {
        if self.category.name() != category().name() {
            return None;
        }
        ResultCode::from_code(self.value)
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::success()
    }
}

impl From<ResultCode> for ErrorCode {
    fn from(code: ResultCode) -> Self {
        Self::from_sqlite(code.code())
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.category.name() == other.category.name()
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.name().hash(state);
        self.value.hash(state);
    }
}

impl PartialEq<ResultCode> for ErrorCode {
    fn eq(&self, other: &ResultCode) -> bool {
        *self == ErrorCode::from(*other)
    }
}

impl PartialEq<Condition> for ErrorCode {
    fn eq(&self, other: &Condition) -> bool {
        self.matches(other)
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("category", &self.category.name())
            .field("value", &self.value)
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category.name(), self.message())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ErrorCode", 2)?;
        state.serialize_field("category", self.category.name())?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

impl std::error::Error for ErrorCode {}

impl From<ErrorCode> for io::Error {
    fn from(code: ErrorCode) -> Self {
        io::Error::new(code.default_condition().io_error_kind(), code)
    }
}
