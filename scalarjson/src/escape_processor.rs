// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Maps the character following a backslash to the character it stands for.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped character.
    ///
    /// # Arguments
    /// * `escape_char` - The byte following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped character. `u` yields `UnsupportedUnicodeEscape`; any byte
    /// outside the short-escape table yields `InvalidStringEscape`.
    ///
    /// # Examples
    /// ```ignore
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n').unwrap(), '\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Result<char, ParseError> {
        match escape_char {
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            b'/' => Ok('/'),
            b'b' => Ok('\x08'), // Backspace
            b'f' => Ok('\x0C'), // Form feed
            b'n' => Ok('\n'),
            b'r' => Ok('\r'),
            b't' => Ok('\t'),
            // TODO: decode \uXXXX, including a following low surrogate escape, into UTF-8
            b'u' => Err(ParseError::UnsupportedUnicodeEscape),
            _ => Err(ParseError::InvalidStringEscape),
        }
    }
}
