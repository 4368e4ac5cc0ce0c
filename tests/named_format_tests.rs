//! Named format registration on formatter contexts.

use dtfmt::{DateValue, Formatter};

fn date() -> DateValue {
    DateValue::new(2023, 4, 17, 15, 30, 0, 0).unwrap()
}

#[test]
fn test_register_and_use_named_format() {
    let formatter = Formatter::new();
    formatter.register_format("longDate", "MMMM d, YYYY");

    assert_eq!(
        formatter.format_named("longDate", &date()).unwrap(),
        "May 17, 2023"
    );
}

#[test]
fn test_named_format_sees_language_switches() {
    use dtfmt::LocaleTable;

    let formatter = Formatter::new();
    formatter.register_format("monthOnly", "MMMM");
    formatter.register_language(
        "xx",
        LocaleTable::new(vec!["Mx"; 12], vec!["mx"; 12], vec!["Dx"; 7], vec!["dx"; 7]).unwrap(),
    );

    assert_eq!(formatter.format_named("monthOnly", &date()).unwrap(), "May");
    formatter.set_language("xx").unwrap();
    assert_eq!(formatter.format_named("monthOnly", &date()).unwrap(), "Mx");
}

#[test]
fn test_registering_same_name_replaces_template() {
    let formatter = Formatter::new();
    formatter.register_format("stamp", "YYYY");
    formatter.register_format("stamp", "YYYY-MM-dd");

    assert_eq!(
        formatter.format_named("stamp", &date()).unwrap(),
        "2023-05-17"
    );
}

#[test]
fn test_shared_named_formats() {
    dtfmt::register_format("meeting", "DDD HH:mm");
    assert_eq!(
        dtfmt::format_named("meeting", &date()).unwrap(),
        "Wednesday 15:30"
    );
}

#[test]
fn test_formats_listing() {
    let formatter = Formatter::new();
    formatter.register_format("b", "YYYY");
    formatter.register_format("a", "MM");

    assert_eq!(formatter.formats(), vec!["a".to_string(), "b".to_string()]);
}
