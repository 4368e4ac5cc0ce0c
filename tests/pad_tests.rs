//! The public left-padding utility, tested independently of formatting.

use dtfmt::pad_left;

#[test]
fn test_pads_below_width() {
    assert_eq!(pad_left(5, 2), "05");
    assert_eq!(pad_left(0, 2), "00");
    assert_eq!(pad_left(7, 5), "00007");
    assert_eq!(pad_left("9", 3), "009");
}

#[test]
fn test_unchanged_at_or_beyond_width() {
    assert_eq!(pad_left(42, 2), "42");
    assert_eq!(pad_left(2023, 2), "2023");
    assert_eq!(pad_left(123, 3), "123");
}

#[test]
fn test_result_length_is_at_least_width() {
    for n in [0u32, 1, 9, 10, 99, 100, 12345] {
        assert!(pad_left(n, 4).len() >= 4);
    }
}

#[test]
fn test_idempotent() {
    assert_eq!(pad_left(pad_left(3, 2), 2), pad_left(3, 2));
    assert_eq!(pad_left(pad_left(1234, 2), 2), "1234");
}

#[test]
fn test_width_zero_and_one() {
    assert_eq!(pad_left(7, 0), "7");
    assert_eq!(pad_left(7, 1), "7");
}
