//! Canonical output, pinned byte-for-byte.

use alloc::string::ToString;

use rstest::rstest;

use crate::{Value, parse, to_string, to_vec};

/// Parse, re-render, and expect the exact input text back.
fn assert_roundtrip(text: &str) {
    assert_eq!(to_string(&parse(text).unwrap()), text);
}

#[rstest]
#[case("null")]
#[case("true")]
#[case("false")]
fn literals(#[case] text: &str) {
    assert_roundtrip(text);
}

#[rstest]
#[case("0")]
#[case("-0")]
#[case("1")]
#[case("-1")]
#[case("1.5")]
#[case("-1.5")]
#[case("3.25")]
#[case("1.0000000000000002")]
fn numbers(#[case] text: &str) {
    assert_roundtrip(text);
}

#[test]
fn exponent_forms_renormalize() {
    // The shortest round-trip rendering of 1e2 is plain decimal.
    assert_eq!(to_string(&parse("1e2").unwrap()), "100");
    assert_eq!(to_string(&parse("1.5e-3").unwrap()), "0.0015");
}

#[test]
fn integral_doubles_drop_the_point() {
    assert_eq!(to_string(&Value::Number(123.0)), "123");
    assert_eq!(to_string(&Value::Number(-7.0)), "-7");
}

#[rstest]
#[case("\"\"")]
#[case("\"Hello\"")]
#[case("\"Hello\\nWorld\"")]
#[case("\"\\\" \\\\ / \\b \\f \\n \\r \\t\"")]
#[case("\"Hello\\u0000World\"")]
#[case("\"\\u0001\"")]
#[case("\"\\u001F\"")]
fn strings(#[case] text: &str) {
    assert_roundtrip(text);
}

#[test]
fn solidus_is_not_escaped() {
    assert_eq!(to_string(&Value::String("a/b".into())), "\"a/b\"");
}

#[test]
fn control_escapes_use_uppercase_hex() {
    assert_eq!(to_string(&Value::String("\u{1f}".into())), "\"\\u001F\"");
    assert_eq!(to_string(&Value::String("\u{b}".into())), "\"\\u000B\"");
}

#[test]
fn non_ascii_is_emitted_verbatim() {
    let text = to_string(&Value::String("caf\u{e9} \u{1d11e}".into()));
    assert_eq!(text, "\"caf\u{e9} \u{1d11e}\"");
}

#[rstest]
#[case("[]")]
#[case("[null]")]
#[case("[null,false,true,123,\"abc\",[1,2,3]]")]
#[case("{}")]
#[case("{\"a\":1,\"b\":[true,false],\"c\":{\"d\":null}}")]
#[case("{\"k\":1,\"k\":2}")]
fn containers(#[case] text: &str) {
    assert_roundtrip(text);
}

#[test]
fn to_vec_reports_exact_length() {
    let bytes = to_vec(&parse("[1,null]").unwrap());
    assert_eq!(bytes.len(), 8);
    assert_eq!(bytes, b"[1,null]".to_vec());
}

#[test]
fn display_matches_to_string() {
    let value = parse("{\"a\":[1,2]}").unwrap();
    assert_eq!(value.to_string(), to_string(&value));
}
