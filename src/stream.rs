use std::io::BufRead;

use crate::error::Result;

/// Character-at-a-time reader over any buffered input, with one character of pushback.
/// It also tracks the physical line the next character belongs to.
///
/// Input is treated as bytes. Anything outside ASCII decodes to a character that
/// the validator rejects, which is all the calculator needs.
pub struct CharStream<R> {
    reader: R,
    pending: Option<char>,
    line: usize,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line: 1,
        }
    }
    fn read_raw(&mut self) -> Result<Option<char>> {
        let byte = match self.reader.fill_buf()?.first() {
            Some(byte) => *byte,
            None => return Ok(None),
        };
        self.reader.consume(1);
        Ok(Some(byte as char))
    }
    /// Reads the next character, or `None` at end of input.
    pub fn read(&mut self) -> Result<Option<char>> {
        let c = match self.pending.take() {
            Some(c) => Some(c),
            None => self.read_raw()?,
        };
        if c == Some('\n') {
            self.line += 1;
        }
        Ok(c)
    }
    pub fn peek(&mut self) -> Result<Option<char>> {
        if self.pending.is_none() {
            self.pending = self.read_raw()?;
        }
        Ok(self.pending)
    }
    /// Pushes a character back. Only one character of pushback is supported.
    pub fn unread(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "double unread");
        if c == '\n' {
            self.line -= 1;
        }
        self.pending = Some(c);
    }
    /// 1-based line of the next character to be read.
    pub fn line(&self) -> usize {
        self.line
    }
}
