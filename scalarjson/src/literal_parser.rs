// SPDX-License-Identifier: Apache-2.0

use crate::config::ParserConfig;
use crate::parse_error::ParseError;
use crate::parser::Parsed;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// The fixed JSON keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    pub fn text(self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::True => "true",
            Literal::False => "false",
        }
    }

    fn value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::True => Value::True,
            Literal::False => Value::False,
        }
    }
}

/// Matches `literal` byte-for-byte at the cursor.
///
/// A short or differing prefix is `InvalidValue`. Unless the root is checked
/// uniformly by the dispatcher, any byte at all after the keyword (a NUL byte
/// included) is `RootNotSingular`.
pub fn match_literal<'a, C: ParserConfig>(
    buffer: SliceInputBuffer<'a>,
    literal: Literal,
) -> Parsed<'a> {
    let rest = buffer
        .strip_prefix(literal.text())
        .ok_or_else(|| buffer.reject(ParseError::InvalidValue))?;

    if !C::UNIFORM_ROOT_CHECK && !rest.is_empty() {
        return Err(rest.reject(ParseError::RootNotSingular));
    }
    Ok((literal.value(), rest))
}
