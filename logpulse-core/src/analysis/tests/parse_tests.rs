use crate::analysis::{ParseError, parse_line};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

#[test]
fn parses_successful_checkout_line() {
    // Arrange
    let line = "2023-01-01 10:00:00 checkout-service 200 150ms user123 tx456 purchase completed";

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(
        record.timestamp,
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
    assert_eq!(record.service_name, "checkout-service");
    assert_eq!(record.status_code, 200);
    assert_eq!(record.response_time_ms, 150);
    assert_eq!(record.user_id, "user123");
    assert_eq!(record.transaction_id, "tx456");
    assert_eq!(record.additional_info, "purchase completed");
    assert!(!record.is_error());
    assert_eq!(record.hour(), 10);
}

#[test]
fn parses_error_line() {
    let record =
        parse_line("2023-01-01 10:05:00 payment-service 503 3000ms user789 tx999 gateway timeout")
            .unwrap();

    assert_eq!(record.status_code, 503);
    assert_eq!(record.response_time_ms, 3000);
    assert!(record.is_error());
}

#[test]
fn status_400_is_an_error_and_399_is_not() {
    let err = parse_line("2023-01-01 10:00:00 api 400 1ms u t x").unwrap();
    let ok = parse_line("2023-01-01 10:00:00 api 399 1ms u t x").unwrap();

    assert!(err.is_error());
    assert!(!ok.is_error());
}

#[test]
fn trailing_whitespace_is_trimmed() {
    let record = parse_line("2023-01-01 10:00:00 api 200 5ms u1 t1 done  \t\r\n").unwrap();

    assert_eq!(record.additional_info, "done");
}

#[test]
fn free_text_keeps_inner_spaces() {
    let record =
        parse_line("2023-01-01 10:00:00 api 200 5ms u1 t1 cart   has 3 items, total 42ms").unwrap();

    assert_eq!(record.additional_info, "cart   has 3 items, total 42ms");
}

#[test]
fn free_text_may_be_absent() {
    let record = parse_line("2023-01-01 10:00:00 api 200 5ms u1 t1").unwrap();

    assert_eq!(record.transaction_id, "t1");
    assert_eq!(record.additional_info, "");
}

#[test]
fn missing_ms_suffix_is_rejected() {
    // Arrange
    let line = "2023-01-01 10:00:00 checkout-service 200 150 user123 tx456 purchase completed";

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert_eq!(
        err,
        ParseError::Malformed {
            line: line.to_string()
        }
    );
    assert_eq!(err.line(), line);
}

#[test]
fn non_numeric_status_is_rejected() {
    let err = parse_line("2023-01-01 10:00:00 api OK 5ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn invalid_calendar_date_is_rejected() {
    let err = parse_line("2023-02-30 10:00:00 api 200 5ms u1 t1 x").unwrap_err();

    match err {
        ParseError::InvalidTimestamp { value, .. } => assert_eq!(value, "2023-02-30 10:00:00"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn invalid_clock_time_is_rejected() {
    let err = parse_line("2023-01-01 24:00:00 api 200 5ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
}

#[test]
fn leap_second_is_rejected() {
    let err = parse_line("2023-01-01 23:59:60 api 200 5ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
}

#[test]
fn status_code_overflow_is_rejected() {
    let err = parse_line("2023-01-01 10:00:00 api 70000 5ms u1 t1 x").unwrap_err();

    match err {
        ParseError::OutOfRange { field, value, .. } => {
            assert_eq!(field, "status_code");
            assert_eq!(value, "70000");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_transaction_id_is_rejected() {
    let err = parse_line("2023-01-01 10:00:00 api 200 5ms u1").unwrap_err();

    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn leading_garbage_is_rejected() {
    let err = parse_line("INFO 2023-01-01 10:00:00 api 200 5ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn formatting_back_preserves_fields() {
    let line = "2023-01-01 10:00:00 checkout-service 200 150ms user123 tx456 purchase completed";

    let record = parse_line(line).unwrap();

    assert_eq!(record.to_line(), line);
    assert_eq!(parse_line(&record.to_line()).unwrap(), record);
}

#[test]
fn leading_whitespace_is_ignored() {
    // Act
    let record =
        parse_line(" \t 2023-01-01 10:00:00 checkout-service 200 150ms user123 tx456 x").unwrap();

    // Assert
    assert_eq!(record.status_code, 200);
    assert_eq!(record.service_name, "checkout-service");
    assert_eq!(record.additional_info, "x");
}

#[test]
fn non_ascii_digits_are_malformed() {
    let err = parse_line("2023-01-01 10:00:00 api ٢٠٠ 5ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn non_ascii_response_time_is_malformed() {
    let err = parse_line("2023-01-01 10:00:00 api 200 ٥ms u1 t1 x").unwrap_err();

    assert!(matches!(err, ParseError::Malformed { .. }));
}
