//! SQLite primary and extended result codes.
//!
//! Discriminants are the values SQLite itself returns. An extended code keeps
//! its primary code in the low 8 bits: `SQLITE_IOERR_READ == SQLITE_IOERR | (1 << 8)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnknownResultCode;

/// Declares `ResultCode` together with its lookup functions so that every
/// variant has exactly one numeric value and one label.
macro_rules! result_codes {
    ($($(#[$meta:meta])* $variant:ident = $code:literal => $label:literal,)+) => {
        /// A result code produced by the SQLite engine.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(into = "i32", try_from = "i32")]
        #[repr(i32)]
        pub enum ResultCode {
            $($(#[$meta])* $variant = $code,)+
        }

        impl ResultCode {
            /// Every result code, in declaration order.
            pub const ALL: &'static [ResultCode] = &[$(ResultCode::$variant,)+];

            /// Looks up the result code with the given numeric value.
            pub const fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(ResultCode::$variant),)+
                    _ => None,
                }
            }

            /// Lower-case label, e.g. `sqlite_ioerr_read`.
            pub const fn label(self) -> &'static str {
                match self {
                    $(ResultCode::$variant => $label,)+
                }
            }
        }
    };
}

result_codes! {
    // Primary codes
    /// Successful result.
    Ok = 0 => "sqlite_ok",
    /// Generic error.
    Error = 1 => "sqlite_error",
    Internal = 2 => "sqlite_internal",
    Perm = 3 => "sqlite_perm",
    Abort = 4 => "sqlite_abort",
    /// The database file is locked.
    Busy = 5 => "sqlite_busy",
    /// A table in the database is locked.
    Locked = 6 => "sqlite_locked",
    NoMem = 7 => "sqlite_nomem",
    ReadOnly = 8 => "sqlite_readonly",
    Interrupt = 9 => "sqlite_interrupt",
    /// Some kind of disk I/O error occurred.
    IoErr = 10 => "sqlite_ioerr",
    Corrupt = 11 => "sqlite_corrupt",
    NotFound = 12 => "sqlite_notfound",
    Full = 13 => "sqlite_full",
    CantOpen = 14 => "sqlite_cantopen",
    Protocol = 15 => "sqlite_protocol",
    Empty = 16 => "sqlite_empty",
    /// The database schema changed.
    Schema = 17 => "sqlite_schema",
    TooBig = 18 => "sqlite_toobig",
    Constraint = 19 => "sqlite_constraint",
    Mismatch = 20 => "sqlite_mismatch",
    Misuse = 21 => "sqlite_misuse",
    NoLfs = 22 => "sqlite_nolfs",
    Auth = 23 => "sqlite_auth",
    Format = 24 => "sqlite_format",
    Range = 25 => "sqlite_range",
    NotADb = 26 => "sqlite_notadb",
    Notice = 27 => "sqlite_notice",
    Warning = 28 => "sqlite_warning",
    /// `sqlite3_step()` has another row ready.
    Row = 100 => "sqlite_row",
    /// `sqlite3_step()` has finished executing.
    Done = 101 => "sqlite_done",

    // Extended codes
    ErrorMissingCollSeq = 257 => "sqlite_error_missing_collseq",
    ErrorRetry = 513 => "sqlite_error_retry",
    ErrorSnapshot = 769 => "sqlite_error_snapshot",
    IoErrRead = 266 => "sqlite_ioerr_read",
    IoErrShortRead = 522 => "sqlite_ioerr_short_read",
    IoErrWrite = 778 => "sqlite_ioerr_write",
    IoErrFsync = 1034 => "sqlite_ioerr_fsync",
    IoErrDirFsync = 1290 => "sqlite_ioerr_dir_fsync",
    IoErrTruncate = 1546 => "sqlite_ioerr_truncate",
    IoErrFstat = 1802 => "sqlite_ioerr_fstat",
    IoErrUnlock = 2058 => "sqlite_ioerr_unlock",
    IoErrRdLock = 2314 => "sqlite_ioerr_rdlock",
    IoErrDelete = 2570 => "sqlite_ioerr_delete",
    IoErrBlocked = 2826 => "sqlite_ioerr_blocked",
    IoErrNoMem = 3082 => "sqlite_ioerr_nomem",
    IoErrAccess = 3338 => "sqlite_ioerr_access",
    IoErrCheckReservedLock = 3594 => "sqlite_ioerr_checkreservedlock",
    IoErrLock = 3850 => "sqlite_ioerr_lock",
    IoErrClose = 4106 => "sqlite_ioerr_close",
    IoErrDirClose = 4362 => "sqlite_ioerr_dir_close",
    IoErrShmOpen = 4618 => "sqlite_ioerr_shmopen",
    IoErrShmSize = 4874 => "sqlite_ioerr_shmsize",
    IoErrShmLock = 5130 => "sqlite_ioerr_shmlock",
    IoErrShmMap = 5386 => "sqlite_ioerr_shmmap",
    IoErrSeek = 5642 => "sqlite_ioerr_seek",
    IoErrDeleteNoEnt = 5898 => "sqlite_ioerr_delete_noent",
    IoErrMmap = 6154 => "sqlite_ioerr_mmap",
    IoErrGetTempPath = 6410 => "sqlite_ioerr_gettemppath",
    IoErrConvPath = 6666 => "sqlite_ioerr_convpath",
    IoErrVnode = 6922 => "sqlite_ioerr_vnode",
    IoErrAuth = 7178 => "sqlite_ioerr_auth",
    IoErrBeginAtomic = 7434 => "sqlite_ioerr_begin_atomic",
    IoErrCommitAtomic = 7690 => "sqlite_ioerr_commit_atomic",
    IoErrRollbackAtomic = 7946 => "sqlite_ioerr_rollback_atomic",
    IoErrData = 8202 => "sqlite_ioerr_data",
    IoErrCorruptFs = 8458 => "sqlite_ioerr_corruptfs",
    IoErrInPage = 8714 => "sqlite_ioerr_in_page",
    LockedSharedCache = 262 => "sqlite_locked_sharedcache",
    LockedVtab = 518 => "sqlite_locked_vtab",
    BusyRecovery = 261 => "sqlite_busy_recovery",
    BusySnapshot = 517 => "sqlite_busy_snapshot",
    BusyTimeout = 773 => "sqlite_busy_timeout",
    CantOpenNoTempDir = 270 => "sqlite_cantopen_notempdir",
    CantOpenIsDir = 526 => "sqlite_cantopen_isdir",
    CantOpenFullPath = 782 => "sqlite_cantopen_fullpath",
    CantOpenConvPath = 1038 => "sqlite_cantopen_convpath",
    CantOpenDirtyWal = 1294 => "sqlite_cantopen_dirtywal",
    CantOpenSymlink = 1550 => "sqlite_cantopen_symlink",
    CorruptVtab = 267 => "sqlite_corrupt_vtab",
    CorruptSequence = 523 => "sqlite_corrupt_sequence",
    CorruptIndex = 779 => "sqlite_corrupt_index",
    ReadOnlyRecovery = 264 => "sqlite_readonly_recovery",
    ReadOnlyCantLock = 520 => "sqlite_readonly_cantlock",
    ReadOnlyRollback = 776 => "sqlite_readonly_rollback",
    ReadOnlyDbMoved = 1032 => "sqlite_readonly_dbmoved",
    ReadOnlyCantInit = 1288 => "sqlite_readonly_cantinit",
    ReadOnlyDirectory = 1544 => "sqlite_readonly_directory",
    AbortRollback = 516 => "sqlite_abort_rollback",
    ConstraintCheck = 275 => "sqlite_constraint_check",
    ConstraintCommitHook = 531 => "sqlite_constraint_commithook",
    ConstraintForeignKey = 787 => "sqlite_constraint_foreignkey",
    ConstraintFunction = 1043 => "sqlite_constraint_function",
    ConstraintNotNull = 1299 => "sqlite_constraint_notnull",
    ConstraintPrimaryKey = 1555 => "sqlite_constraint_primarykey",
    ConstraintTrigger = 1811 => "sqlite_constraint_trigger",
    ConstraintUnique = 2067 => "sqlite_constraint_unique",
    ConstraintVtab = 2323 => "sqlite_constraint_vtab",
    ConstraintRowId = 2579 => "sqlite_constraint_rowid",
    ConstraintPinned = 2835 => "sqlite_constraint_pinned",
    ConstraintDataType = 3091 => "sqlite_constraint_datatype",
    NoticeRecoverWal = 283 => "sqlite_notice_recover_wal",
    NoticeRecoverRollback = 539 => "sqlite_notice_recover_rollback",
    NoticeRbu = 795 => "sqlite_notice_rbu",
    WarningAutoIndex = 284 => "sqlite_warning_autoindex",
    AuthUser = 279 => "sqlite_auth_user",
    OkLoadPermanently = 256 => "sqlite_ok_load_permanently",
    OkSymlink = 512 => "sqlite_ok_symlink",
}

impl ResultCode {
    /// Numeric value as returned by SQLite.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Primary code this code belongs to. Primary codes return themselves.
    pub fn primary(self) -> ResultCode {
        // Every primary code is defined, so the lookup cannot miss.
        ResultCode::from_code(self.code() & 0xff).unwrap_or(self)
    }

    /// Returns true for extended result codes.
    pub const fn is_extended(self) -> bool {
        self.code() > 0xff
    }
}

impl From<ResultCode> for i32 {
    fn from(code: ResultCode) -> Self {
        code.code()
    }
}

impl TryFrom<i32> for ResultCode {
    type Error = UnknownResultCode;

    fn try_from(code: i32) -> Result<Self, UnknownResultCode> {
        ResultCode::from_code(code).ok_or(UnknownResultCode(code))
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
