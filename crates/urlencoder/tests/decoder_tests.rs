use std::borrow::Cow;

use urlencoder::{decode, UrlEncoderError};

const UNRESERVED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVQXYZ0123456789-_.~";

/// Helper: assert that `input` fails with `InvalidEscapeSequence` at `index`.
fn assert_invalid_at(input: &str, index: usize) {
    match decode(input) {
        Err(UrlEncoderError::InvalidEscapeSequence { index: at, .. }) => {
            assert_eq!(at, index, "wrong error index for {input:?}");
        }
        Ok(decoded) => panic!("expected error for {input:?}, decoded to {decoded:?}"),
    }
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn decode_empty() {
    assert_eq!(decode("").unwrap(), "");
}

#[test]
fn decode_unreserved_unchanged() {
    assert_eq!(decode(UNRESERVED).unwrap(), UNRESERVED);
}

#[test]
fn decode_without_escapes_is_not_copied() {
    let decoded = decode(UNRESERVED).unwrap();
    assert!(matches!(decoded, Cow::Borrowed(s) if std::ptr::eq(s, UNRESERVED)));
}

#[test]
fn decode_passes_reserved_characters_through() {
    assert_eq!(decode("a b+c&d=e?f").unwrap(), "a b+c&d=e?f");
}

#[test]
fn decode_passes_non_ascii_through() {
    assert_eq!(decode("café %E2%82%AC").unwrap(), "café €");
}

// ============================================================================
// Valid Escapes
// ============================================================================

#[test]
fn decode_space() {
    assert_eq!(decode("a%20test%20%26").unwrap(), "a test &");
}

#[test]
fn decode_plus_is_literal() {
    assert_eq!(decode("a+b").unwrap(), "a+b");
    assert_eq!(decode("a%2Bb").unwrap(), "a+b");
}

#[test]
fn decode_lowercase_hex() {
    assert_eq!(decode("%c3%a9").unwrap(), "é");
    assert_eq!(decode("%C3%a9").unwrap(), "é");
    assert_eq!(decode("%2f").unwrap(), "/");
}

#[test]
fn decode_multibyte() {
    assert_eq!(decode("%C3%A9").unwrap(), "é");
    assert_eq!(decode("%E6%97%A5%E6%9C%AC").unwrap(), "日本");
    assert_eq!(decode("%F0%9F%98%81").unwrap(), "😁");
}

#[test]
fn decode_double_percent() {
    assert_eq!(decode("%25%25").unwrap(), "%%");
    assert_eq!(decode("%2525").unwrap(), "%25");
}

#[test]
fn decode_control_bytes() {
    assert_eq!(decode("%00%09%0A%7F").unwrap(), "\0\t\n\u{7f}");
}

#[test]
fn decode_mixed_ascii_line() {
    assert_eq!(
        decode("%21abcdefghijklmnopqrstuvwxyz%25%25ABCDEFGHIJKLMNOPQRSTUVQXYZ0123456789-_.~%3D")
            .unwrap(),
        "!abcdefghijklmnopqrstuvwxyz%%ABCDEFGHIJKLMNOPQRSTUVQXYZ0123456789-_.~="
    );
}

#[test]
fn decode_unicode_fixture() {
    assert_eq!(
        decode("%25%23ok%C3%A9k%C3%89%C8%A2%20smile%21%F0%9F%98%81").unwrap(),
        "%#okékÉȢ smile!😁"
    );
}

// ============================================================================
// Malformed Escapes
// ============================================================================

#[test]
fn decode_trailing_percent_fails() {
    assert_invalid_at("sdkjfh%", 6);
}

#[test]
fn decode_single_trailing_digit_fails() {
    assert_invalid_at("sdkjfh%6", 6);
}

#[test]
fn decode_non_hex_digits_fail() {
    assert_invalid_at("sdkjfh%xx", 6);
}

#[test]
fn decode_signed_digits_fail() {
    assert_invalid_at("sdfjfh%-1", 6);
    assert_invalid_at("%+1", 0);
}

#[test]
fn decode_second_digit_invalid_fails() {
    assert_invalid_at("%2G", 0);
    assert_invalid_at("%2 ", 0);
}

#[test]
fn decode_lone_percent_fails() {
    assert_invalid_at("%", 0);
    assert_invalid_at("%%", 0);
}

#[test]
fn decode_reports_first_error_only() {
    assert_invalid_at("ok%20%zz%", 5);
}

// ============================================================================
// Invalid UTF-8
// ============================================================================

#[test]
fn decode_truncated_utf8_fails() {
    assert_invalid_at("%C3", 0);
    assert_invalid_at("%F0%9F%98", 0);
}

#[test]
fn decode_unexpected_continuation_fails() {
    assert_invalid_at("abc%A9", 3);
}

#[test]
fn decode_invalid_lead_byte_fails() {
    assert_invalid_at("%FF", 0);
    assert_invalid_at("x%C0%80", 1);
}

#[test]
fn decode_escaped_lead_with_literal_ascii_fails() {
    assert_invalid_at("%C3A", 0);
}

// ============================================================================
// Error Details
// ============================================================================

#[test]
fn error_message_names_the_sequence() {
    let err = decode("sdkjfh%xx").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("index 6"), "got: {message}");
    assert!(message.contains("%xx"), "got: {message}");
}

#[test]
fn error_message_for_truncated_escape() {
    let err = decode("sdkjfh%6").unwrap_err();
    assert!(err.to_string().contains("incomplete"), "got: {err}");
}

#[test]
fn error_message_for_invalid_utf8() {
    let err = decode("%C3").unwrap_err();
    assert!(err.to_string().contains("UTF-8"), "got: {err}");
}

#[test]
fn error_is_comparable() {
    assert_eq!(decode("%").unwrap_err(), decode("%").unwrap_err());
    assert_eq!(decode("a%").unwrap_err().index(), 1);
}
