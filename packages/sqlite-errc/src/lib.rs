//! Portable error codes for SQLite.
//!
//! Translates SQLite's numeric result codes, and the errors that carry them,
//! into an [`ErrorCode`] (a value plus its category) and a coarse
//! [`Condition`] such as "I/O error" or "resource busy".
//!
//! ```
//! use sqlite_errc::{map_exception_to_error_code, Condition, Exception, ResultCode};
//!
//! let e = Exception::with_codes("disk I/O error", -1, ResultCode::IoErrFsync.code());
//! let code = map_exception_to_error_code(&e);
//! assert_eq!(code, ResultCode::IoErrFsync);
//! assert!(code.matches(&Condition::Io));
//! ```

pub mod category;
pub mod condition;
pub mod error;
pub mod error_code;
pub mod exception;
pub mod mapper;
pub mod result_code;

pub use category::{category, ErrorCategory, SqliteCategory};
pub use condition::Condition;
pub use error_code::ErrorCode;
pub use exception::{Exception, SqliteFailure, NOT_SET};
pub use mapper::{
    map_error_to_error_code, map_exception_to_error_code, map_failure_to_error_code, Failure,
};
pub use result_code::ResultCode;
