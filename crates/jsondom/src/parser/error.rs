use thiserror::Error;

/// Reasons a JSON document is rejected.
///
/// Every failure is detected at the point of grammar violation and
/// propagated as one of these kinds; no partial tree survives a failed
/// parse. Reading the wrong accessor on a [`Value`](crate::Value) is a
/// caller bug, not a parse error, and is deliberately absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// A token that matches no JSON production, such as `nul` or `+1`.
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace input remains after the single root value.
    #[error("unexpected content after the root value")]
    RootNotSingular,
    /// A number whose magnitude overflows a double.
    #[error("number out of range of a double")]
    NumberTooBig,
    /// The input ended inside a string.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash followed by an unrecognized escape letter.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    /// A raw control byte below U+0020 inside a string.
    #[error("raw control character in string")]
    InvalidStringChar,
    /// A `\u` escape without four hexadecimal digits.
    #[error("invalid hex digits in \\u escape")]
    InvalidUnicodeHex,
    /// An unpaired or malformed UTF-16 surrogate in `\u` escapes.
    #[error("invalid surrogate pair in \\u escape")]
    InvalidUnicodeSurrogate,
    /// An array element not followed by `,` or `]`.
    #[error("missing comma or ']' in array")]
    MissCommaOrSquareBracket,
    /// An object member without a `"`-prefixed key.
    #[error("missing object key")]
    MissKey,
    /// An object key not followed by `:`.
    #[error("missing ':' after object key")]
    MissColon,
    /// An object member not followed by `,` or `}`.
    #[error("missing comma or '}}' in object")]
    MissCommaOrCurlyBracket,
}
