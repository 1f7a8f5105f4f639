use memchr::memchr_iter;

use crate::constants::is_whitespace;
use crate::{Error, ErrorKind, Location};

/// Read position over the complete input buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Unread input. Borrows from the buffer, not from the cursor.
    pub fn rest(&self) -> &'a [u8] {
        self.input.get(self.position..).unwrap_or(&[])
    }

    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    pub fn advance(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.input.len());
    }

    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_slice(&mut self, expected: &[u8]) -> bool {
        if self.rest().starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        let skipped = self
            .rest()
            .iter()
            .take_while(|&&byte| is_whitespace(byte))
            .count();
        self.position += skipped;
    }

    pub fn error(&self, kind: ErrorKind) -> Error {
        self.error_at(kind, self.position)
    }

    pub fn error_at(&self, kind: ErrorKind, offset: usize) -> Error {
        Error::new(kind, locate(self.input, offset))
    }
}

pub fn locate(input: &[u8], offset: usize) -> Location {
    let offset = offset.min(input.len());
    let mut line = 1;
    let mut line_start = 0;
    for idx in memchr_iter(b'\n', &input[..offset]) {
        line += 1;
        line_start = idx + 1;
    }
    Location {
        offset,
        line,
        column: offset - line_start + 1,
    }
}
