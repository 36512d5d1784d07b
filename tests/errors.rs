use rstest::rstest;

use json_descent::{from_slice, from_str, ErrorKind};

#[rstest]
fn empty_input() {
    let err = from_str("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected end of input while expecting a value at line 1, col 1"
    );
}

#[rstest]
fn whitespace_only_input() {
    let err = from_str("   ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected end of input while expecting a value at line 1, col 4"
    );
}

#[rstest]
fn unexpected_character_at_value_position() {
    let err = from_str("@").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected character '@' while parsing a value at line 1, col 1"
    );
}

#[rstest]
fn positions_track_lines_and_columns() {
    let err = from_str("{\n  \"a\": @\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected character '@' while parsing a value at line 2, col 8"
    );
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.column(), Some(8));
}

#[rstest]
fn carriage_returns_do_not_start_new_lines() {
    let err = from_str("[1,\r\n@]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected character '@' while parsing a value at line 2, col 1"
    );
}

#[rstest]
fn columns_count_characters_not_bytes() {
    let err = from_str("[\"日本\", @]").unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert_eq!(err.column(), Some(8));
}

#[rstest]
fn trailing_comma_in_object_points_at_the_brace() {
    let err = from_str("{\"a\":1,}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Object keys must be strings starting with '\"' at line 1, col 8"
    );
}

#[rstest]
fn missing_colon() {
    let err = from_str("{\"a\" 1}").unwrap_err();
    assert_eq!(err.to_string(), "Expected ':' at line 1, col 6");
}

#[rstest]
fn missing_comma_between_elements() {
    let err = from_str("[1 2]").unwrap_err();
    assert_eq!(err.to_string(), "Expected ',' at line 1, col 4");
}

#[rstest]
fn unquoted_object_key() {
    let err = from_str("{a: 1}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Object keys must be strings starting with '\"' at line 1, col 2"
    );
}

#[rstest]
fn misspelled_literal() {
    let err = from_str("nul").unwrap_err();
    assert_eq!(err.to_string(), "Expected 'null' at line 1, col 4");

    let err = from_str("fales").unwrap_err();
    assert_eq!(err.to_string(), "Expected 'false' at line 1, col 4");
}

#[rstest]
fn syntax_errors_carry_locations() {
    let err = from_str("[").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.location.is_some());
}

#[rstest]
fn input_errors_carry_no_location() {
    let err = from_slice(&[0xC0, 0x80]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Input);
    assert!(err.location.is_none());
    assert!(err.to_string().starts_with("invalid utf-8:"));
}

#[rstest]
fn first_violation_wins() {
    // Both the key and the value are malformed; the scan reports the key.
    let err = from_str("{broken: 01}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Object keys must be strings starting with '\"' at line 1, col 2"
    );
}
