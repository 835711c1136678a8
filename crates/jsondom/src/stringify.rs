//! Canonical JSON text from a [`Value`] tree.
//!
//! The output is deterministic: no whitespace, numbers in their shortest
//! round-trip form, strings escaped only where the grammar requires it.
//! Raw UTF-8 at or above U+0020 passes through verbatim.

use alloc::{string::String, vec::Vec};

use crate::{buffer::OutputSink, value::Value};

/// Serializes `value` as canonical JSON bytes.
///
/// The returned vector holds the exact output, no terminator appended.
#[must_use]
pub fn to_vec(value: &Value) -> Vec<u8> {
    let mut out = OutputSink::new();
    write_value(&mut out, value);
    out.finish()
}

/// Serializes `value` as canonical JSON text.
///
/// # Examples
///
/// ```
/// use jsondom::{Value, to_string};
///
/// let doc = jsondom::parse("[ 1 , \"two\" , null ]")?;
/// assert_eq!(to_string(&doc), r#"[1,"two",null]"#);
/// # Ok::<(), jsondom::ParseError>(())
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    let bytes = to_vec(value);
    debug_assert!(core::str::from_utf8(&bytes).is_ok());
    // SAFETY: the serializer emits string payloads (valid UTF-8 by
    // construction) and ASCII punctuation, never a bare invalid byte.
    unsafe { String::from_utf8_unchecked(bytes) }
}

fn write_value(out: &mut OutputSink, value: &Value) {
    match value {
        Value::Null => out.push_slice(b"null"),
        Value::Boolean(true) => out.push_slice(b"true"),
        Value::Boolean(false) => out.push_slice(b"false"),
        Value::Number(number) => write_number(out, *number),
        Value::String(string) => write_string(out, string),
        Value::Array(elements) => {
            out.push(b'[');
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(out, element);
            }
            out.push(b']');
        }
        Value::Object(object) => {
            out.push(b'{');
            for (index, member) in object.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_string(out, &member.key);
                out.push(b':');
                write_value(out, &member.value);
            }
            out.push(b'}');
        }
    }
}

fn write_number(out: &mut OutputSink, number: f64) {
    // `parse` never produces a non-finite number; building one by hand and
    // serializing it is a caller bug.
    debug_assert!(number.is_finite(), "JSON numbers must be finite");
    out.push_display(number);
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn write_string(out: &mut OutputSink, string: &str) {
    out.push(b'"');
    for &byte in string.as_bytes() {
        match byte {
            b'"' => out.push_slice(b"\\\""),
            b'\\' => out.push_slice(b"\\\\"),
            0x08 => out.push_slice(b"\\b"),
            0x0C => out.push_slice(b"\\f"),
            b'\n' => out.push_slice(b"\\n"),
            b'\r' => out.push_slice(b"\\r"),
            b'\t' => out.push_slice(b"\\t"),
            byte if byte < 0x20 => {
                out.push_slice(b"\\u00");
                out.push(HEX_DIGITS[usize::from(byte >> 4)]);
                out.push(HEX_DIGITS[usize::from(byte & 0x0F)]);
            }
            byte => out.push(byte),
        }
    }
    out.push(b'"');
}
