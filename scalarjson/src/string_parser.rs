// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::escape_processor::EscapeProcessor;
use crate::parse_error::{ParseError, Rejection};
use crate::parser::Parsed;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// Decodes a quoted string literal starting at the cursor.
///
/// Unescaped runs are copied from the input in one piece; each escape flushes
/// the pending run and appends its decoded character. Nothing is returned to
/// the caller unless the closing quote is reached, so a failed decode never
/// leaves a partial string behind.
pub fn parse_string(buffer: SliceInputBuffer<'_>) -> Parsed<'_> {
    let mut cursor = match buffer.consume_byte() {
        Some((b'"', after_quote)) => after_quote,
        _ => return Err(buffer.reject(ParseError::InvalidValue)),
    };
    let mut decoded = String::new();
    let mut run_start = cursor.current_pos();

    loop {
        let Some((byte, next)) = cursor.consume_byte() else {
            return Err(cursor.reject(ParseError::MissQuotationMark));
        };
        match byte {
            b'"' => {
                copy_run(&mut decoded, cursor, run_start)?;
                return Ok((Value::String(decoded), next));
            }
            b'\\' => {
                copy_run(&mut decoded, cursor, run_start)?;
                let Some((escape_char, after_escape)) = next.consume_byte() else {
                    return Err(next.reject(ParseError::MissQuotationMark));
                };
                let unescaped = EscapeProcessor::process_simple_escape(escape_char)
                    .map_err(|error| next.reject(error))?;
                decoded.push(unescaped);
                cursor = after_escape;
                run_start = cursor.current_pos();
            }
            control if control < 0x20 => {
                return Err(cursor.reject(ParseError::InvalidStringChar));
            }
            _ => cursor = next,
        }
    }
}

/// Appends the unescaped input between `run_start` and the cursor.
// Both ends sit just before or after an ASCII byte, so they are char boundaries.
fn copy_run(
    decoded: &mut String,
    cursor: SliceInputBuffer<'_>,
    run_start: usize,
) -> Result<(), Rejection> {
    let run = cursor
        .slice(run_start, cursor.current_pos())
        .ok_or_else(|| cursor.reject(ParseError::InvalidValue))?;
    decoded.push_str(run);
    Ok(())
}
