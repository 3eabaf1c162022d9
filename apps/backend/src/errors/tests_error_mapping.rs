// Unit tests for error mapping - conversions into AppError and their codes
use std::io::{Error as IoError, ErrorKind};

use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_every_illegal_kind_to_illegal_move() {
    let kinds = [
        IllegalMoveKind::GameOver,
        IllegalMoveKind::CardIndexOutOfRange,
        IllegalMoveKind::InformationTokensFull,
        IllegalMoveKind::NoInformationTokens,
        IllegalMoveKind::InvalidTarget,
        IllegalMoveKind::ValueOutOfRange,
        IllegalMoveKind::HintTouchesNothing,
        IllegalMoveKind::OutOfTurn,
    ];
    for kind in kinds {
        let app: AppError = DomainError::illegal(kind, "nope").into();
        assert_eq!(app.code(), ErrorCode::IllegalMove);
        assert!(matches!(app, AppError::IllegalMove { kind: k, .. } if k == kind));
    }
}

#[test]
fn maps_io_errors() {
    let app: AppError = IoError::new(ErrorKind::PermissionDenied, "read-only").into();
    assert_eq!(app.code(), ErrorCode::IoError);
    assert!(app.to_string().contains("read-only"));
    assert!(app.is_fatal());
}

#[test]
fn maps_json_errors() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::SerializationError);
}

#[test]
fn display_names_the_offending_input() {
    assert_eq!(
        AppError::unknown_actor("oracle").to_string(),
        "Unknown actor: oracle"
    );
    assert!(AppError::duplicate_output("out/records.csv")
        .to_string()
        .contains("out/records.csv"));
}
