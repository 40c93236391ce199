// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::config::ParserConfig;
use crate::parse_error::{ParseError, Rejection};
use crate::parser::Parsed;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// Validates a numeric literal at the cursor and converts it to an `f64`.
///
/// Grammar: `-? int (\.[0-9]+)? ([eE][+-]?[0-9]+)?` where `int` is any run of
/// digits, or `0 | [1-9][0-9]*` when leading zeros are disallowed. Unless the
/// root is checked uniformly by the dispatcher, the literal must span the
/// rest of the input.
pub fn parse_number<'a, C: ParserConfig>(buffer: SliceInputBuffer<'a>) -> Parsed<'a> {
    let start = buffer.current_pos();
    let end = scan_number::<C>(buffer)?;

    if !C::UNIFORM_ROOT_CHECK && !end.is_empty() {
        return Err(end.reject(ParseError::InvalidValue));
    }

    let literal = buffer
        .slice(start, end.current_pos())
        .ok_or_else(|| buffer.reject(ParseError::InvalidValue))?;
    let number = parse_float(literal).map_err(|error| buffer.reject(error))?;
    Ok((Value::Number(number), end))
}

/// Consumes the longest valid numeric literal, returning the buffer positioned after it.
fn scan_number<C: ParserConfig>(
    buffer: SliceInputBuffer<'_>,
) -> Result<SliceInputBuffer<'_>, Rejection> {
    let mut cursor = buffer;
    if cursor.peek() == Some(b'-') {
        cursor = cursor.advance(1);
    }

    cursor = scan_integer::<C>(cursor)?;

    if cursor.peek() == Some(b'.') {
        cursor = scan_digits(cursor.advance(1))?;
    }

    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        cursor = cursor.advance(1);
        if matches!(cursor.peek(), Some(b'+' | b'-')) {
            cursor = cursor.advance(1);
        }
        cursor = scan_digits(cursor)?;
    }
    Ok(cursor)
}

fn scan_integer<C: ParserConfig>(
    cursor: SliceInputBuffer<'_>,
) -> Result<SliceInputBuffer<'_>, Rejection> {
    if !C::ALLOW_LEADING_ZEROS && cursor.peek() == Some(b'0') {
        // A lone zero; whatever digits follow belong to the trailing content
        return Ok(cursor.advance(1));
    }
    scan_digits(cursor)
}

/// Consumes a mandatory, non-empty run of digits.
fn scan_digits(
    cursor: SliceInputBuffer<'_>,
) -> Result<SliceInputBuffer<'_>, Rejection> {
    match cursor.skip_digits() {
        (0, _) => Err(cursor.reject(ParseError::InvalidValue)),
        (_, after) => Ok(after),
    }
}

/// Converts a validated literal. Magnitudes beyond `f64` range are `NumberTooBig`;
/// underflow rounds toward zero and succeeds.
pub fn parse_float(literal: &str) -> Result<f64, ParseError> {
    match f64::from_str(literal) {
        Ok(val) if val.is_finite() => Ok(val),
        Ok(_) => Err(ParseError::NumberTooBig),
        Err(_) => Err(ParseError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DefaultConfig, Rfc8259Config};

    fn number(input: &str) -> Result<f64, ParseError> {
        parse_number::<DefaultConfig>(SliceInputBuffer::new(input))
            .map_err(|rejection| rejection.error)
            .map(|(value, _)| match value {
                Value::Number(n) => n,
                other => panic!("Expected Number, got: {other:?}"),
            })
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_valid_numbers() {
        assert_eq!(number("0"), Ok(0.0));
        assert_eq!(number("-0"), Ok(-0.0));
        assert_eq!(number("123"), Ok(123.0));
        assert_eq!(number("-456"), Ok(-456.0));
        assert_eq!(number("3.14"), Ok(3.14));
        assert_eq!(number("-2.71828"), Ok(-2.71828));
        assert_eq!(number("1.23e4"), Ok(12300.0));
        assert_eq!(number("1E+2"), Ok(100.0));
        assert_eq!(number("1e-2"), Ok(0.01));
        assert_eq!(number("1.5E10"), Ok(1.5e10));
    }

    #[test]
    fn test_leading_zeros_accepted() {
        assert_eq!(number("0000123"), Ok(123.0));
        assert_eq!(number("-007.5"), Ok(-7.5));
    }

    #[test]
    fn test_malformed_numbers() {
        for input in [
            "123abc", "-123-", "1.2.3", "1E2.5", "1E2.5k", "-", "+1", ".5", "1.", "1e", "1e+",
            "-.5", "1 ", "0x10", "inf", "NaN",
        ] {
            assert_eq!(number(input), Err(ParseError::InvalidValue), "input {input:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(number("1e300000009"), Err(ParseError::NumberTooBig));
        assert_eq!(number("-1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(number("1.7976931348623157e308"), Ok(f64::MAX));
    }

    #[test]
    fn test_underflow_rounds_to_zero() {
        assert_eq!(number("1e-400"), Ok(0.0));
    }

    #[test]
    fn test_rejection_offsets() {
        let err = parse_number::<DefaultConfig>(SliceInputBuffer::new("1.x")).unwrap_err();
        assert_eq!(err.error, ParseError::InvalidValue);
        assert_eq!(err.offset, 2);

        let err = parse_number::<DefaultConfig>(SliceInputBuffer::new("12ab")).unwrap_err();
        assert_eq!(err.offset, 2);

        let err = parse_number::<DefaultConfig>(SliceInputBuffer::new("1e999")).unwrap_err();
        assert_eq!(err.error, ParseError::NumberTooBig);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_strict_integer_part() {
        let (value, rest) =
            parse_number::<Rfc8259Config>(SliceInputBuffer::new("0123")).unwrap();
        assert_eq!(value, Value::Number(0.0));
        assert_eq!(rest.current_pos(), 1);

        let (value, rest) =
            parse_number::<Rfc8259Config>(SliceInputBuffer::new("0.25 ")).unwrap();
        assert_eq!(value, Value::Number(0.25));
        assert_eq!(rest.current_pos(), 4);
    }

    #[test]
    fn test_parse_float_direct() {
        assert_eq!(parse_float("42"), Ok(42.0));
        assert_eq!(parse_float("4e400"), Err(ParseError::NumberTooBig));
        assert_eq!(parse_float("4x"), Err(ParseError::InvalidValue));
    }
}
