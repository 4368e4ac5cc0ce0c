use dtfmt::{DateValue, FormatError, Formatter, LocaleError, LocaleTable};

#[test]
fn test_invalid_date_display() {
    let err = DateValue::new(2023, 12, 1, 0, 0, 0, 0).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("invalid date"));
    assert!(msg.contains("month index 12"));
}

#[test]
fn test_day_out_of_range_display() {
    let err = DateValue::new(2023, 1, 30, 0, 0, 0, 0).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("day 30"));
    assert!(msg.contains("1-28"));
}

#[test]
fn test_unknown_locale_display() {
    let err = LocaleError::UnknownLocale {
        tag: "xx".to_string(),
    };
    assert!(format!("{}", err).contains("'xx'"));
}

#[test]
fn test_invalid_locale_display() {
    let err = LocaleTable::new(
        vec!["Jan"; 12],
        vec!["J"; 12],
        vec!["Sunday"; 6],
        vec!["Sun"; 7],
    )
    .unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("expected 7"));
    assert!(msg.contains("got 6"));
    assert!(msg.contains("weekday"));
}

#[test]
fn test_index_out_of_range_display() {
    let err = LocaleError::IndexOutOfRange { index: 12, len: 12 };
    let msg = format!("{}", err);
    assert!(msg.contains("index 12"));
    assert!(msg.contains("12 entries"));
}

#[test]
fn test_unknown_named_format() {
    let formatter = Formatter::new();
    let date = DateValue::from_ymd(2023, 4, 17).unwrap();
    let err = formatter.format_named("longDate", &date).unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownFormat {
            name: "longDate".to_string()
        }
    );
    assert!(format!("{}", err).contains("'longDate'"));
}

#[cfg(feature = "chrono")]
#[test]
fn test_unparseable_source_value() {
    let err = DateValue::parse("2023-13-99").unwrap_err();
    assert!(matches!(err, FormatError::InvalidDate { .. }));
    assert!(format!("{}", err).contains("unparseable"));
}
