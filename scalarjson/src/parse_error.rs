// SPDX-License-Identifier: Apache-2.0

use crate::value::ValueType;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The lead character matched no grammar, or the matched grammar failed validation.
    InvalidValue,
    /// A complete root value was followed by more content.
    RootNotSingular,
    /// A syntactically valid number does not fit in an `f64`.
    NumberTooBig,
    /// A string literal was never closed.
    MissQuotationMark,
    /// A backslash was followed by a character that is not a known escape.
    InvalidStringEscape,
    /// An unescaped control character (below U+0020) appeared inside a string.
    InvalidStringChar,
    /// A `\uXXXX` escape was found; code point escapes are not decoded.
    UnsupportedUnicodeEscape,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root value is followed by more content",
            ParseError::NumberTooBig => "number out of range",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
            ParseError::UnsupportedUnicodeEscape => "unicode escapes are not supported",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}

/// A [`ParseError`] together with the byte offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub error: ParseError,
    pub offset: usize,
}

impl Rejection {
    pub fn new(error: ParseError, offset: usize) -> Self {
        Self { error, offset }
    }
}

impl From<Rejection> for ParseError {
    fn from(rejection: Rejection) -> Self {
        rejection.error
    }
}

/// Returned by the typed accessors of [`Value`](crate::Value) when the value
/// holds a different type than the one requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Name of the type the accessor projects to.
    pub expected: &'static str,
    /// The type the value actually holds.
    pub found: ValueType,
}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "value is not a {} (type = {})", self.expected, self.found)
    }
}

impl core::error::Error for TypeMismatch {}
