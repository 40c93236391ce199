// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ParseError, Rejection};

/// A position into the input text.
///
/// The buffer is `Copy` and every advancing method returns a new buffer, so a
/// sub-parser can look ahead freely and the caller only adopts the new position
/// once the sub-parser succeeds. The position only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceInputBuffer<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer positioned at the start of `data`.
    pub fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte under the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte under the cursor and the buffer positioned after it.
    pub fn consume_byte(self) -> Option<(u8, Self)> {
        let byte = self.peek()?;
        Some((byte, self.advance(1)))
    }

    /// Moves `n` bytes forward, never past the end of the data.
    pub fn advance(self, n: usize) -> Self {
        let pos = self.pos.saturating_add(n).min(self.data.len());
        Self { pos, ..self }
    }

    /// Advances past a maximal run of space, tab, carriage return and newline.
    pub fn skip_whitespace(self) -> Self {
        let skipped = self
            .data
            .as_bytes()
            .get(self.pos..)
            .unwrap_or_default()
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            .count();
        self.advance(skipped)
    }

    /// Advances past a run of ASCII digits, returning how many were skipped.
    pub fn skip_digits(self) -> (usize, Self) {
        let count = self
            .data
            .as_bytes()
            .get(self.pos..)
            .unwrap_or_default()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        (count, self.advance(count))
    }

    /// If the remaining input starts with `prefix`, returns the buffer positioned after it.
    pub fn strip_prefix(self, prefix: &str) -> Option<Self> {
        let rest = self.data.as_bytes().get(self.pos..)?;
        rest.starts_with(prefix.as_bytes())
            .then(|| self.advance(prefix.len()))
    }

    /// Returns true once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Gets the text between two positions, or `None` if they do not fall on
    /// character boundaries inside the data.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        self.data.get(start..end)
    }

    /// Builds a [`Rejection`] located at the current position.
    pub fn reject(&self, error: ParseError) -> Rejection {
        Rejection::new(error, self.pos)
    }
}
