//! Line-buffered input stream with token, bounded, and typed reads.
//!
//! Wraps any `BufRead` source and pulls input a line at a time, keeping a
//! forward-only cursor into the current line. Everything a read leaves
//! unconsumed (a token's trailing terminator, the `BC` after a typed read
//! of `500BC`) stays visible to the next read, which is exactly the
//! behavior the session demonstrates.

use crate::buffer::LineBuffer;
use crate::convert;
use log::debug;
use std::io::{self, BufRead};

pub struct InputStream<R: BufRead> {
    source: R,
    /// Current line, trailing newline included (CRLF normalized to LF).
    line: String,
    /// Byte offset of the cursor within `line`.
    pos: usize,
    /// Set by a failed typed extraction; gates typed extraction only.
    failed: bool,
}

impl<R: BufRead> InputStream<R> {
    pub fn new(source: R) -> Self {
        InputStream {
            source,
            line: String::new(),
            pos: 0,
            failed: false,
        }
    }

    /// Ensure the cursor points at unread input.
    ///
    /// Returns false once the source is exhausted. End of input is not an
    /// error here: reads built on top yield empty/zero results and the
    /// session keeps going, the same way an interactive run behaves when
    /// stdin closes.
    fn fill(&mut self) -> io::Result<bool> {
        while self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            let bytes_read = self.source.read_line(&mut self.line)?;
            if bytes_read == 0 {
                debug!("input exhausted");
                return Ok(false);
            }
            if self.line.ends_with("\r\n") {
                self.line.pop();
                self.line.pop();
                self.line.push('\n');
            }
        }
        Ok(true)
    }

    fn peek_char(&mut self) -> io::Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.line[self.pos..].chars().next())
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(c) = self.peek_char()? {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
        Ok(())
    }

    /// Read one whitespace-delimited token.
    ///
    /// Skips leading whitespace (crossing line boundaries), then collects
    /// until the next whitespace character, which is left in the stream.
    /// An empty token means the input ran out; that sets the fail state.
    pub fn read_token(&mut self) -> io::Result<String> {
        self.skip_whitespace()?;
        let mut token = String::new();
        while let Some(c) = self.peek_char()? {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.advance(c);
        }
        if token.is_empty() {
            self.failed = true;
        }
        debug!("token read: '{token}'");
        Ok(token)
    }

    /// Read into `buf` until its limit or the line terminator, leaving
    /// the terminator in the stream. Returns the character count stored.
    pub fn get_into(&mut self, buf: &mut LineBuffer) -> io::Result<usize> {
        self.read_bounded(buf, false)
    }

    /// Read into `buf` until its limit or the line terminator, consuming
    /// the terminator. The terminator is not consumed when the buffer
    /// fills first.
    pub fn get_line_into(&mut self, buf: &mut LineBuffer) -> io::Result<usize> {
        self.read_bounded(buf, true)
    }

    fn read_bounded(
        &mut self,
        buf: &mut LineBuffer,
        consume_delimiter: bool,
    ) -> io::Result<usize> {
        buf.clear();
        while let Some(c) = self.peek_char()? {
            if c == '\n' {
                if consume_delimiter {
                    self.advance(c);
                }
                break;
            }
            if !buf.push(c) {
                // Buffer full; the rest of the line stays in the stream.
                break;
            }
            self.advance(c);
        }
        debug!("bounded read: '{}' ({} chars)", buf.as_str(), buf.len());
        Ok(buf.len())
    }

    /// Consume input through the next line terminator (or end of input).
    ///
    /// This is both the "press enter" pacing gate and the absorber for
    /// terminators that token and get-style reads leave behind.
    pub fn discard_line(&mut self) -> io::Result<()> {
        if self.fill()? {
            self.pos = self.line.len();
        }
        Ok(())
    }

    /// Typed integer extraction.
    ///
    /// Skips leading whitespace, then reads an optional sign and decimal
    /// digits, stopping at the first non-numeric character and leaving it
    /// in the stream. When no digits are found the stream enters its fail
    /// state, nothing is consumed, and 0 is returned. A stream already in
    /// the fail state refuses extraction until `clear_failure`.
    pub fn read_int(&mut self) -> io::Result<i32> {
        if self.failed {
            debug!("typed read refused: stream is in a failed state");
            return Ok(0);
        }
        self.skip_whitespace()?;
        if !self.fill()? {
            self.failed = true;
            return Ok(0);
        }
        let (value, consumed, ok) = convert::parse_int_prefix(&self.line[self.pos..]);
        if !ok {
            self.failed = true;
            debug!("typed read failed at '{}'", &self.line[self.pos..]);
            return Ok(0);
        }
        self.pos += consumed;
        debug!("typed read: {value}");
        Ok(value)
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Reset the fail state so typed extraction works again.
    pub fn clear_failure(&mut self) {
        self.failed = false;
    }
}
