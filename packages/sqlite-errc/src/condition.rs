//! Portable error conditions.
//!
//! A [`Condition`] is the coarse, engine-agnostic class of a failure. Callers
//! that only need to know "was this I/O?" or "is the database busy?" compare
//! against a condition instead of the full set of result codes.

use std::fmt;
use std::io;

use serde::Serialize;

use crate::error_code::ErrorCode;
use crate::result_code::ResultCode;

/// Engine-agnostic classification of a result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// No error.
    Success,
    ConnectionAborted,
    ResourceBusy,
    NoLockAvailable,
    OutOfMemory,
    Interrupted,
    Io,
    NotFound,
    Protocol,
    FileTooLarge,
    OperationNotPermitted,
    ResultOutOfRange,
    /// No portable class applies; compare by the specific code, category included.
    Specific(ErrorCode),
}

impl Condition {
    /// Condition that stands for exactly one result code.
    pub fn specific(code: ResultCode) -> Self {
        Condition::Specific(code.into())
    }

    /// Returns true unless this is a self-mapped [`Condition::Specific`].
    pub const fn is_generic(&self) -> bool {
        !matches!(self, Condition::Specific(_))
    }

    /// Closest `std::io::ErrorKind`, for handing a code to I/O-oriented callers.
    pub fn io_error_kind(&self) -> io::ErrorKind {
        match self {
            Condition::ConnectionAborted => io::ErrorKind::ConnectionAborted,
            Condition::ResourceBusy => io::ErrorKind::ResourceBusy,
            Condition::OutOfMemory => io::ErrorKind::OutOfMemory,
            Condition::Interrupted => io::ErrorKind::Interrupted,
            Condition::NotFound => io::ErrorKind::NotFound,
            Condition::Protocol => io::ErrorKind::InvalidData,
            Condition::FileTooLarge => io::ErrorKind::FileTooLarge,
            Condition::OperationNotPermitted => io::ErrorKind::PermissionDenied,
            Condition::ResultOutOfRange => io::ErrorKind::InvalidInput,
            Condition::Success
            | Condition::NoLockAvailable
            | Condition::Io
            | Condition::Specific(_) => io::ErrorKind::Other,
        }
    }
}

impl From<ResultCode> for Condition {
    fn from(code: ResultCode) -> Self {
        classify(code)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Success => "success",
            Condition::ConnectionAborted => "connection aborted",
            Condition::ResourceBusy => "device or resource busy",
            Condition::NoLockAvailable => "no lock available",
            Condition::OutOfMemory => "not enough memory",
            Condition::Interrupted => "interrupted",
            Condition::Io => "io error",
            Condition::NotFound => "no such file or directory",
            Condition::Protocol => "protocol error",
            Condition::FileTooLarge => "file too large",
            Condition::OperationNotPermitted => "operation not permitted",
            Condition::ResultOutOfRange => "result out of range",
            Condition::Specific(code) => code.message(),
        };
        f.write_str(s)
    }
}

/// Portable condition of a result code.
///
/// Must stay exhaustive: a new `ResultCode` variant does not compile until it
/// is classified here.
pub(crate) fn classify(code: ResultCode) -> Condition {
    use ResultCode::*;

    match code {
        Ok => Condition::Success,
        Abort | AbortRollback => Condition::ConnectionAborted,
        Busy | BusyRecovery | BusySnapshot | BusyTimeout => Condition::ResourceBusy,
        Locked => Condition::NoLockAvailable,
        NoMem => Condition::OutOfMemory,
        Interrupt => Condition::Interrupted,
        IoErr | IoErrRead | IoErrShortRead | IoErrWrite | IoErrFsync | IoErrDirFsync
        | IoErrTruncate | IoErrFstat | IoErrUnlock | IoErrRdLock | IoErrDelete
        | IoErrBlocked | IoErrNoMem | IoErrAccess | IoErrCheckReservedLock | IoErrLock
        | IoErrClose | IoErrDirClose | IoErrShmOpen | IoErrShmSize | IoErrShmLock
        | IoErrShmMap | IoErrSeek | IoErrDeleteNoEnt | IoErrMmap | IoErrGetTempPath
        | IoErrConvPath | IoErrVnode | IoErrAuth | IoErrBeginAtomic | IoErrCommitAtomic
        | IoErrRollbackAtomic | IoErrData | IoErrCorruptFs | IoErrInPage => Condition::Io,
        NotFound => Condition::NotFound,
        Protocol => Condition::Protocol,
        TooBig | NoLfs => Condition::FileTooLarge,
        Misuse => Condition::OperationNotPermitted,
        Range => Condition::ResultOutOfRange,
        Error | Internal | Perm | ReadOnly | Corrupt | Full | CantOpen | Empty | Schema
        | Constraint | Mismatch | Auth | Format | NotADb | Notice | Warning | Row | Done
        | ErrorMissingCollSeq | ErrorRetry | ErrorSnapshot | LockedSharedCache
        | LockedVtab | CantOpenNoTempDir | CantOpenIsDir | CantOpenFullPath
        | CantOpenConvPath | CantOpenDirtyWal | CantOpenSymlink | CorruptVtab
        | CorruptSequence | CorruptIndex | ReadOnlyRecovery | ReadOnlyCantLock
        | ReadOnlyRollback | ReadOnlyDbMoved | ReadOnlyCantInit | ReadOnlyDirectory
        | ConstraintCheck | ConstraintCommitHook | ConstraintForeignKey
        | ConstraintFunction | ConstraintNotNull | ConstraintPrimaryKey
        | ConstraintTrigger | ConstraintUnique | ConstraintVtab | ConstraintRowId
        | ConstraintPinned | ConstraintDataType | NoticeRecoverWal
        | NoticeRecoverRollback | NoticeRbu | WarningAutoIndex | AuthUser
        | OkLoadPermanently | OkSymlink => Condition::specific(code),
    }
}
