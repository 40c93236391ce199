// SPDX-License-Identifier: Apache-2.0

//! A single-pass recursive-descent JSON parser for root values that are
//! literals, numbers or strings.
//!
//! Every failure is reported as one of a closed set of [`ParseError`] kinds,
//! and the byte offset of the failure is available through [`Parser`].
//!
//! ```
//! use scalarjson::{parse, ParseError, ValueType};
//!
//! let value = parse(r#""Hello\nWorld""#).unwrap();
//! assert_eq!(value.get_type(), ValueType::String);
//! assert_eq!(value.get_string(), Ok("Hello\nWorld"));
//!
//! assert_eq!(parse("1e300000009"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{ConfigStruct, DefaultConfig, ParserConfig, Rfc8259Config};

mod parse_error;
pub use parse_error::{ParseError, TypeMismatch};

mod value;
pub use value::{Value, ValueType};

mod slice_input_buffer;

mod escape_processor;

mod literal_parser;

mod number_parser;

mod string_parser;

mod parser;
pub use parser::Parser;

/// Parses `input` as exactly one JSON value using the [`DefaultConfig`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses `input` with a custom [`ParserConfig`].
pub fn parse_with_config<C: ParserConfig>(input: &str) -> Result<Value, ParseError> {
    Parser::<C>::with_config(input).parse()
}

/// Parses `input` into an existing value.
///
/// On success `value` is overwritten. On any error it is left exactly as it was.
///
/// ```
/// use scalarjson::{parse_into, ParseError, Value};
///
/// let mut value = Value::Number(1.0);
/// assert_eq!(parse_into(&mut value, "\"unterminated"), Err(ParseError::MissQuotationMark));
/// assert_eq!(value, Value::Number(1.0));
/// ```
pub fn parse_into(value: &mut Value, input: &str) -> Result<(), ParseError> {
    *value = parse(input)?;
    Ok(())
}
