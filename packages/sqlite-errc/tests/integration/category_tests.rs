//! Category behavior over the full result code set.

use ntest::timeout;
use rand::Rng;

use sqlite_errc::{category, Condition, ErrorCategory, ErrorCode, ResultCode};

const IOERR_FAMILY: &[ResultCode] = &[
    ResultCode::IoErr,
    ResultCode::IoErrRead,
    ResultCode::IoErrShortRead,
    ResultCode::IoErrWrite,
    ResultCode::IoErrFsync,
    ResultCode::IoErrDirFsync,
    ResultCode::IoErrTruncate,
    ResultCode::IoErrFstat,
    ResultCode::IoErrUnlock,
    ResultCode::IoErrRdLock,
    ResultCode::IoErrDelete,
    ResultCode::IoErrBlocked,
    ResultCode::IoErrNoMem,
    ResultCode::IoErrAccess,
    ResultCode::IoErrCheckReservedLock,
    ResultCode::IoErrLock,
    ResultCode::IoErrClose,
    ResultCode::IoErrDirClose,
    ResultCode::IoErrShmOpen,
    ResultCode::IoErrShmSize,
    ResultCode::IoErrShmLock,
    ResultCode::IoErrShmMap,
    ResultCode::IoErrSeek,
    ResultCode::IoErrDeleteNoEnt,
    ResultCode::IoErrMmap,
    ResultCode::IoErrGetTempPath,
    ResultCode::IoErrConvPath,
    ResultCode::IoErrVnode,
    ResultCode::IoErrAuth,
    ResultCode::IoErrBeginAtomic,
    ResultCode::IoErrCommitAtomic,
    ResultCode::IoErrRollbackAtomic,
    ResultCode::IoErrData,
    ResultCode::IoErrCorruptFs,
    ResultCode::IoErrInPage,
];

#[timeout(1000)]
#[test]
fn test_every_code_has_message_and_condition() {
    let cat = category();
    for &code in ResultCode::ALL {
        let message = cat.message(code.code());
        assert!(!message.is_empty());
        assert_ne!(message, "unknown sqlite exception", "{:?}", code);
        // Deterministic
        assert_eq!(message, cat.message(code.code()));

        let condition = cat.default_condition(code.code());
        assert_eq!(condition, cat.default_condition(code.code()));
        assert_eq!(condition, Condition::from(code));
    }
}

#[timeout(1000)]
#[test]
fn test_ok_maps_to_success() {
    assert_eq!(
        category().default_condition(ResultCode::Ok.code()),
        Condition::Success
    );
}

#[timeout(1000)]
#[test]
fn test_ioerr_family_maps_to_io() {
    for &code in IOERR_FAMILY {
        assert_eq!(
            category().default_condition(code.code()),
            Condition::Io,
            "{:?}",
            code
        );
    }

    // No other code is classified as I/O.
    let io_count = ResultCode::ALL
        .iter()
        .filter(|c| Condition::from(**c) == Condition::Io)
        .count();
    assert_eq!(io_count, IOERR_FAMILY.len());

    // The family is exactly the codes whose primary is IOERR.
    assert!(ResultCode::ALL
        .iter()
        .filter(|c| c.primary() == ResultCode::IoErr)
        .all(|c| IOERR_FAMILY.contains(c)));
}

#[timeout(1000)]
#[test]
fn test_busy_family_maps_to_resource_busy() {
    for &code in ResultCode::ALL
        .iter()
        .filter(|c| c.label().starts_with("sqlite_busy"))
    {
        assert_eq!(Condition::from(code), Condition::ResourceBusy, "{:?}", code);
    }
}

#[timeout(1000)]
#[test]
fn test_generic_classes() {
    let expected = [
        (ResultCode::Abort, Condition::ConnectionAborted),
        (ResultCode::AbortRollback, Condition::ConnectionAborted),
        (ResultCode::Locked, Condition::NoLockAvailable),
        (ResultCode::NoMem, Condition::OutOfMemory),
        (ResultCode::Interrupt, Condition::Interrupted),
        (ResultCode::NotFound, Condition::NotFound),
        (ResultCode::Protocol, Condition::Protocol),
        (ResultCode::TooBig, Condition::FileTooLarge),
        (ResultCode::NoLfs, Condition::FileTooLarge),
        (ResultCode::Misuse, Condition::OperationNotPermitted),
        (ResultCode::Range, Condition::ResultOutOfRange),
    ];
    for (code, condition) in expected {
        assert_eq!(category().default_condition(code.code()), condition);
    }
}

#[timeout(1000)]
#[test]
fn test_schema_maps_to_itself() {
    let condition = category().default_condition(ResultCode::Schema.code());
    assert_eq!(condition, Condition::specific(ResultCode::Schema));
    assert!(!condition.is_generic());
    assert!(ErrorCode::from(ResultCode::Schema).matches(&condition));
}

#[timeout(1000)]
#[test]
fn test_unknown_integer_gets_fallback_message() {
    assert_eq!(category().message(999_999), "unknown sqlite exception");
}

#[timeout(5000)]
#[test]
fn test_message_is_total_over_random_integers() {
    let mut rng = rand::thread_rng();
    let cat = category();
    for _ in 0..10_000 {
        let value: i32 = rng.gen();
        let message = cat.message(value);
        match ResultCode::from_code(value) {
            Some(code) => assert_eq!(message, code.label()),
            None => {
                assert_eq!(message, "unknown sqlite exception");
                assert_eq!(
                    cat.default_condition(value),
                    Condition::Specific(ErrorCode::from_sqlite(value))
                );
            }
        }
    }
    for value in [i32::MIN, -1, 0, i32::MAX] {
        assert!(!cat.message(value).is_empty());
    }
}

#[timeout(1000)]
#[test]
fn test_result_code_serializes_as_integer() {
    let json = serde_json::to_string(&ResultCode::ReadOnlyDbMoved).unwrap();
    assert_eq!(json, "1032");

    let code: ResultCode = serde_json::from_str("517").unwrap();
    assert_eq!(code, ResultCode::BusySnapshot);

    assert!(serde_json::from_str::<ResultCode>("999999").is_err());
}
