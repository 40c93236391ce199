// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use log::{debug, trace};

use crate::config::{DefaultConfig, ParserConfig};
use crate::literal_parser::{match_literal, Literal};
use crate::number_parser::parse_number;
use crate::parse_error::{ParseError, Rejection};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_parser::parse_string;
use crate::value::Value;

/// Outcome of a sub-parser: the value and the buffer positioned after it, or
/// the located reason it was rejected.
pub type Parsed<'a> = Result<(Value, SliceInputBuffer<'a>), Rejection>;

/// A single-value JSON parser over a string slice.
///
/// Every call to [`parse`](Self::parse) starts again from the beginning of the
/// input, so the result depends only on the input text.
///
/// Generic over [`ParserConfig`] for leading-zero and root-singularity behavior.
pub struct Parser<'a, C: ParserConfig = DefaultConfig> {
    input: SliceInputBuffer<'a>,
    end_offset: usize,
    error_offset: Option<usize>,
    _config: PhantomData<C>,
}

impl<'a> Parser<'a, DefaultConfig> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use scalarjson::Parser;
    /// let value = Parser::new("true").parse().unwrap();
    /// assert_eq!(value.get_boolean(), Ok(true));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input)
    }
}

impl<'a, C: ParserConfig> Parser<'a, C> {
    /// Creates a new parser with a custom [`ParserConfig`].
    ///
    /// # Example
    /// ```
    /// use scalarjson::{ParseError, Parser, Rfc8259Config};
    /// let mut parser = Parser::<Rfc8259Config>::with_config(" 12 ");
    /// assert_eq!(parser.parse().unwrap().get_number(), Ok(12.0));
    ///
    /// let mut parser = Parser::<Rfc8259Config>::with_config("012");
    /// assert_eq!(parser.parse(), Err(ParseError::RootNotSingular));
    /// ```
    pub fn with_config(input: &'a str) -> Self {
        Parser {
            input: SliceInputBuffer::new(input),
            end_offset: 0,
            error_offset: None,
            _config: PhantomData,
        }
    }

    /// Parses the input as exactly one JSON value.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        match self.parse_root() {
            Ok((value, rest)) => {
                self.end_offset = rest.current_pos();
                self.error_offset = None;
                Ok(value)
            }
            Err(rejection) => {
                debug!(
                    "Rejected input: {} at offset {}",
                    rejection.error, rejection.offset
                );
                self.end_offset = 0;
                self.error_offset = Some(rejection.offset);
                Err(rejection.into())
            }
        }
    }

    /// Byte offset just past the last successfully parsed value.
    pub fn offset(&self) -> usize {
        self.end_offset
    }

    /// Byte offset at which the last [`parse`](Self::parse) call failed, if it did.
    pub fn error_offset(&self) -> Option<usize> {
        self.error_offset
    }

    fn parse_root(&self) -> Parsed<'a> {
        let (value, rest) = Self::parse_value(self.input.skip_whitespace())?;

        if C::UNIFORM_ROOT_CHECK {
            let trailing = rest.skip_whitespace();
            if !trailing.is_empty() {
                return Err(trailing.reject(ParseError::RootNotSingular));
            }
        }
        Ok((value, rest))
    }

    /// Selects a grammar from the lead character. Anything unrecognized is
    /// tried as a number.
    fn parse_value(buffer: SliceInputBuffer<'a>) -> Parsed<'a> {
        let literal = match buffer.peek() {
            None => return Err(buffer.reject(ParseError::ExpectValue)),
            Some(b'n') => Literal::Null,
            Some(b't') => Literal::True,
            Some(b'f') => Literal::False,
            Some(b'"') => {
                trace!("String at offset {}", buffer.current_pos());
                return parse_string(buffer);
            }
            Some(_) => {
                trace!("Number at offset {}", buffer.current_pos());
                return parse_number::<C>(buffer);
            }
        };
        trace!("Literal {} at offset {}", literal.text(), buffer.current_pos());
        match_literal::<C>(buffer, literal)
    }
}
