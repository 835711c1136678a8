//! Strict recursive-descent JSON parser.
//!
//! The parser walks the input bytes with a cursor and one
//! [`ScratchStack`]. String contents accumulate on the scratch until the
//! closing quote reveals their final length; array elements and object
//! members accumulate in ordinary vectors, whose recursive drop releases
//! every partially built subtree when a parse fails mid-container.

mod error;
mod escape;

use alloc::{string::String, vec::Vec};

pub use error::ParseError;

use crate::{
    buffer::ScratchStack,
    value::{Object, Value},
};

/// Parses a complete JSON document into a [`Value`] tree.
///
/// The input must contain exactly one JSON value surrounded by optional
/// whitespace. Anything else is rejected with a [`ParseError`], and no
/// partial tree is retained.
///
/// # Examples
///
/// ```
/// use jsondom::{ParseError, Value, parse};
///
/// assert_eq!(parse(" true "), Ok(Value::Boolean(true)));
/// assert_eq!(parse("true false"), Err(ParseError::RootNotSingular));
/// ```
///
/// # Errors
///
/// One of the [`ParseError`] kinds, naming the first grammar violation.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(ParseError::RootNotSingular);
    }
    debug_assert!(parser.scratch.is_empty(), "scratch bytes left behind");
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    scratch: ScratchStack,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            scratch: ScratchStack::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(
        &mut self,
        literal: &'static str,
        value: Value,
    ) -> Result<Value, ParseError> {
        if self.input.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        // Integer part: a lone zero, or a nonzero digit with any tail.
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.bump();
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            self.digits()?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.bump();
            if let Some(b'+' | b'-') = self.peek() {
                self.bump();
            }
            self.digits()?;
        }
        let text = &self.input[start..self.pos];
        let number: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        Ok(Value::Number(number))
    }

    /// At least one ASCII digit.
    fn digits(&mut self) -> Result<(), ParseError> {
        let Some(b'0'..=b'9') = self.peek() else {
            return Err(ParseError::InvalidValue);
        };
        while let Some(b'0'..=b'9') = self.peek() {
            self.bump();
        }
        Ok(())
    }

    fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.parse_string_raw().map(Value::String)
    }

    /// Parses a quoted string into its decoded contents.
    ///
    /// On failure the scratch is rewound to its length at string start, so
    /// no partial decode survives.
    fn parse_string_raw(&mut self) -> Result<String, ParseError> {
        let head = self.scratch.mark();
        match self.scan_string() {
            Ok(()) => {
                let bytes = self.scratch.pop(head);
                debug_assert!(core::str::from_utf8(&bytes).is_ok());
                // SAFETY: the scratch receives only char-boundary slices of
                // the UTF-8 input and `encode_utf8` output, so the popped
                // bytes are valid UTF-8.
                Ok(unsafe { String::from_utf8_unchecked(bytes) })
            }
            Err(err) => {
                self.scratch.rewind(head);
                Err(err)
            }
        }
    }

    fn scan_string(&mut self) -> Result<(), ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.bump();
        let bytes = self.input.as_bytes();
        let mut run = self.pos;
        loop {
            match bytes.get(self.pos) {
                None => return Err(ParseError::MissQuotationMark),
                Some(b'"') => {
                    self.scratch.push_slice(&bytes[run..self.pos]);
                    self.bump();
                    return Ok(());
                }
                Some(b'\\') => {
                    self.scratch.push_slice(&bytes[run..self.pos]);
                    self.bump();
                    self.parse_escape()?;
                    run = self.pos;
                }
                Some(&byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(_) => self.bump(),
            }
        }
    }

    /// One escape sequence; the leading backslash has been consumed.
    fn parse_escape(&mut self) -> Result<(), ParseError> {
        let Some(byte) = self.peek() else {
            return Err(ParseError::InvalidStringEscape);
        };
        self.bump();
        match byte {
            b'"' => self.scratch.push(b'"'),
            b'\\' => self.scratch.push(b'\\'),
            b'/' => self.scratch.push(b'/'),
            b'b' => self.scratch.push(0x08),
            b'f' => self.scratch.push(0x0C),
            b'n' => self.scratch.push(b'\n'),
            b'r' => self.scratch.push(b'\r'),
            b't' => self.scratch.push(b'\t'),
            b'u' => return self.parse_unicode_escape(),
            _ => return Err(ParseError::InvalidStringEscape),
        }
        Ok(())
    }

    /// Decodes `\uXXXX`, pairing surrogates, and pushes the scalar's UTF-8
    /// encoding onto the scratch. The leading `\u` has been consumed.
    fn parse_unicode_escape(&mut self) -> Result<(), ParseError> {
        let mut code = self.parse_hex4()?;
        if escape::is_high_surrogate(code) {
            if self.peek() != Some(b'\\') {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            self.bump();
            if self.peek() != Some(b'u') {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            self.bump();
            let low = self.parse_hex4()?;
            if !escape::is_low_surrogate(low) {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            code = escape::combine_surrogates(code, low);
        } else if escape::is_low_surrogate(code) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        let scalar = char::from_u32(code).ok_or(ParseError::InvalidUnicodeSurrogate)?;
        self.scratch.push_scalar(scalar);
        Ok(())
    }

    /// Exactly four hex digits forming one UTF-16 code unit.
    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let bytes = self.input.as_bytes();
        let Some(digits) = bytes.get(self.pos..self.pos + 4) else {
            return Err(ParseError::InvalidUnicodeHex);
        };
        let code = escape::hex4(digits).ok_or(ParseError::InvalidUnicodeHex)?;
        self.pos += 4;
        Ok(code)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.bump();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Value::Array(Vec::new()));
        }
        let mut elements = Vec::new();
        loop {
            let element = self.parse_value()?;
            elements.push(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.bump();
                    elements.shrink_to_fit();
                    return Ok(Value::Array(elements));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.bump();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.bump();
            return Ok(Value::Object(Object::new()));
        }
        let mut object = Object::new();
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string_raw()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            object.push(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.bump();
                    object.shrink_to_fit();
                    return Ok(Value::Object(object));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
