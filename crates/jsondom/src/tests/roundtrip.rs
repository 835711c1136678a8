//! Round-trip properties over randomly generated trees.

use alloc::string::String;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{Value, parse, to_string, to_vec};

#[quickcheck]
fn parse_inverts_stringify(value: Value) -> bool {
    let text = to_string(&value);
    parse(&text) == Ok(value)
}

#[quickcheck]
fn stringify_is_idempotent(value: Value) -> bool {
    let text = to_string(&value);
    parse(&text).map(|reparsed| to_string(&reparsed)) == Ok(text)
}

#[quickcheck]
fn to_vec_matches_to_string(value: Value) -> bool {
    to_vec(&value) == to_string(&value).into_bytes()
}

#[quickcheck]
fn number_fidelity_is_bit_for_bit(number: f64) -> TestResult {
    if !number.is_finite() {
        return TestResult::discard();
    }
    let text = to_string(&Value::Number(number));
    let Ok(reparsed) = parse(&text) else {
        return TestResult::failed();
    };
    TestResult::from_bool(reparsed.as_number().map(f64::to_bits) == Some(number.to_bits()))
}

#[quickcheck]
fn string_contents_survive(contents: String) -> bool {
    let text = to_string(&Value::String(contents.clone()));
    parse(&text) == Ok(Value::String(contents))
}

#[quickcheck]
fn clone_compares_equal(value: Value) -> bool {
    value == value.clone()
}

#[quickcheck]
fn serde_json_text_parses_to_the_same_tree(value: Value) -> bool {
    // Our Serialize impl feeds serde_json's writer; its text must mean the
    // same tree our own parser builds.
    let Ok(text) = serde_json::to_string(&value) else {
        return false;
    };
    parse(&text) == Ok(value)
}

#[quickcheck]
fn serde_deserialize_agrees_with_parse(value: Value) -> bool {
    let text = to_string(&value);
    let Ok(via_serde) = serde_json::from_str::<Value>(&text) else {
        return false;
    };
    via_serde == value
}

#[test]
fn whitespace_normalizes_away() {
    let parsed = parse(" { \"a\" : [ 1 , 2 ] , \"b\" : \"c\" } ").unwrap();
    assert_eq!(to_string(&parsed), "{\"a\":[1,2],\"b\":\"c\"}");
}
