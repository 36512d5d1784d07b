use memchr::{memchr_iter, memrchr};

use crate::error::{Error, Location};
use crate::Result;

// One cursor per parse call: the input text plus a single byte offset. It
// never escapes the call that created it.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    pub(crate) fn peek(&self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.offset) {
            Some(&byte) if byte.is_ascii() => Some(byte as char),
            Some(_) => self.input[self.offset..].chars().next(),
            None => None,
        }
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.offset) {
            Some(&byte) if byte.is_ascii() => {
                self.offset += 1;
                Some(byte as char)
            }
            Some(_) => {
                let ch = self.input[self.offset..].chars().next()?;
                self.offset += ch.len_utf8();
                Some(ch)
            }
            None => None,
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    pub(crate) fn try_consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        if self.try_consume(expected) {
            Ok(())
        } else {
            Err(self.error(format!("Expected '{expected}'")))
        }
    }

    pub(crate) fn expect_literal(&mut self, literal: &str) -> Result<()> {
        self.skip_whitespace();
        let rest = &self.input[self.offset..];
        if rest.starts_with(literal) {
            self.offset += literal.len();
            return Ok(());
        }
        // Report at the first mismatching character, which is also the end of
        // input when the literal is cut short.
        let matched: usize = rest
            .chars()
            .zip(literal.chars())
            .take_while(|(have, want)| have == want)
            .map(|(have, _)| have.len_utf8())
            .sum();
        Err(self.error_at(self.offset + matched, format!("Expected '{literal}'")))
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        self.error_at(self.offset, message)
    }

    pub(crate) fn error_at(&self, offset: usize, message: impl Into<String>) -> Error {
        Error::syntax(message, self.location_of(offset))
    }

    // 1-based line and column derived from the consumed prefix: every '\n'
    // bumps the line and resets the column. Columns count characters.
    fn location_of(&self, offset: usize) -> Location {
        let consumed = &self.input.as_bytes()[..offset];
        let line = memchr_iter(b'\n', consumed).count() + 1;
        let line_start = memrchr(b'\n', consumed).map_or(0, |idx| idx + 1);
        let column = self.input[line_start..offset].chars().count() + 1;
        Location {
            offset,
            line,
            column,
        }
    }
}
