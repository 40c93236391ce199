// SPDX-License-Identifier: Apache-2.0

// Error reporting: error kinds, offsets and the untouched out-parameter

use scalarjson::{parse, parse_into, ParseError, Parser, TypeMismatch, Value, ValueType};

#[test]
fn test_missing_quotation_mark() {
    assert_eq!(parse(r#""hello world"#), Err(ParseError::MissQuotationMark));
    assert_eq!(parse(r#"""#), Err(ParseError::MissQuotationMark));
    assert_eq!(parse(r#""trailing backslash\"#), Err(ParseError::MissQuotationMark));
}

#[test]
fn test_invalid_string_char() {
    assert_eq!(parse("\"\x01\""), Err(ParseError::InvalidStringChar));
    assert_eq!(parse("\"\x1F\""), Err(ParseError::InvalidStringChar));
    assert_eq!(parse("\"tab\there\""), Err(ParseError::InvalidStringChar));
}

#[test]
fn test_invalid_string_escape() {
    for input in [r#""\v""#, r#""\'""#, r#""\0""#, r#""\x""#] {
        assert_eq!(
            parse(input),
            Err(ParseError::InvalidStringEscape),
            "input {input:?}"
        );
    }
}

#[test]
fn test_unicode_escape_is_not_passed_through() {
    assert_eq!(
        parse(r#""caf\u00e9""#),
        Err(ParseError::UnsupportedUnicodeEscape)
    );
}

#[test]
fn test_error_offsets() {
    let cases: &[(&str, ParseError, usize)] = &[
        ("   ", ParseError::ExpectValue, 3),
        ("  nul", ParseError::InvalidValue, 2),
        ("true!", ParseError::RootNotSingular, 4),
        ("12.", ParseError::InvalidValue, 3),
        ("1e99999", ParseError::NumberTooBig, 0),
        ("\"ab\\z\"", ParseError::InvalidStringEscape, 4),
        ("\"ab\x07\"", ParseError::InvalidStringChar, 3),
        ("\"abc", ParseError::MissQuotationMark, 4),
    ];
    for &(input, error, offset) in cases {
        let mut parser = Parser::new(input);
        assert_eq!(parser.parse(), Err(error), "input {input:?}");
        assert_eq!(parser.error_offset(), Some(offset), "input {input:?}");
    }
}

#[test]
fn test_parse_into_leaves_value_on_error() {
    let original = Value::String("keep me".into());
    for input in [
        "",
        "nul",
        "null x",
        "1e300000009",
        "\"unterminated",
        "\"bad \\q escape\"",
        "\"ctrl \x02\"",
    ] {
        let mut value = original.clone();
        assert!(parse_into(&mut value, input).is_err(), "input {input:?}");
        assert_eq!(value, original, "input {input:?}");
    }
}

#[test]
fn test_parse_into_overwrites_on_success() {
    let mut value = Value::String("old".into());
    assert_eq!(parse_into(&mut value, "42"), Ok(()));
    assert_eq!(value, Value::Number(42.0));

    assert_eq!(parse_into(&mut value, "null"), Ok(()));
    assert_eq!(value.get_type(), ValueType::Null);
}

#[test]
fn test_accessor_type_mismatch() {
    let value = parse("true").unwrap();
    assert_eq!(
        value.get_number(),
        Err(TypeMismatch {
            expected: "number",
            found: ValueType::True
        })
    );

    let value = parse("12").unwrap();
    let err = value.get_string().unwrap_err();
    assert_eq!(err.to_string(), "value is not a string (type = number)");

    let value = parse(r#""x""#).unwrap();
    let err = value.get_boolean().unwrap_err();
    assert_eq!(err.to_string(), "value is not a boolean (type = string)");
}

#[test]
fn test_errors_display() {
    assert_eq!(
        ParseError::RootNotSingular.to_string(),
        "root value is followed by more content"
    );
    assert_eq!(ParseError::NumberTooBig.to_string(), "number out of range");
}
