//! Conversion of SQLite failures into [`ErrorCode`]s.
//!
//! Every function here is best-effort: an error that carries no SQLite code
//! maps to the empty code instead of failing.

use std::error::Error as StdError;

use crate::error_code::ErrorCode;
use crate::exception::{Exception, SqliteFailure, NOT_SET};

/// A failure that may or may not come from SQLite.
#[derive(Debug)]
pub enum Failure {
    Sqlite(Exception),
    Other(anyhow::Error),
}

impl From<Exception> for Failure {
    fn from(e: Exception) -> Self {
        Failure::Sqlite(e)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<Exception>() {
            Ok(e) => Failure::Sqlite(e),
            Err(other) => Failure::Other(other),
        }
    }
}

/// Maps a SQLite failure to the most specific code it carries.
///
/// The basic code takes precedence over the extended code when both are set.
/// A failure with neither set maps to the empty code.
pub fn map_exception_to_error_code<E>(e: &E) -> ErrorCode
where
    E: SqliteFailure + ?Sized,
{
    let mut code = ErrorCode::success();

    let extended = e.extended_error_code();
    if extended != NOT_SET {
        code = ErrorCode::from_sqlite(extended);
    }

    let basic = e.error_code();
    if basic != NOT_SET {
        code = ErrorCode::from_sqlite(basic);
    }

    tracing::trace!(
        "Mapped SQLite failure (code={}, extended={}) to {}",
        basic,
        extended,
        code.value()
    );
    code
}

/// Maps an opaque error to an [`ErrorCode`].
///
/// Returns the empty code for `None` and for any error that is not an
/// [`Exception`].
pub fn map_error_to_error_code(err: Option<&(dyn StdError + 'static)>) -> ErrorCode {
    let Some(err) = err else {
        return ErrorCode::success();
    };

    match err.downcast_ref::<Exception>() {
        Some(e) => map_exception_to_error_code(e),
        None => {
            tracing::debug!("Ignoring non-SQLite error: {}", err);
            ErrorCode::success()
        }
    }
}

/// Maps a [`Failure`] to an [`ErrorCode`]; `Failure::Other` maps to the empty code.
pub fn map_failure_to_error_code(failure: &Failure) -> ErrorCode {
    match failure {
        Failure::Sqlite(e) => map_exception_to_error_code(e),
        Failure::Other(err) => {
            tracing::debug!("Ignoring non-SQLite error: {}", err);
            ErrorCode::success()
        }
    }
}

impl From<&Exception> for ErrorCode {
    fn from(e: &Exception) -> Self {
        map_exception_to_error_code(e)
    }
}

impl From<&Failure> for ErrorCode {
    fn from(failure: &Failure) -> Self {
        map_failure_to_error_code(failure)
    }
}
