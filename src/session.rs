//! The guided console session.
//!
//! One linear sequence of demonstration steps over a shared input stream
//! and a shared output stream, paced by prompt-and-wait gates. The steps
//! share no state besides the two streams themselves, so anything a step
//! leaves unconsumed in the input is visible to the next step that reads.

use crate::buffer::LineBuffer;
use crate::convert::parse_leading_int;
use crate::input::InputStream;
use crate::output::{Justify, OutputStream};
use log::debug;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Sample value for the float formatting step.
const FLOAT_SAMPLE: f32 = 9.99999;

/// Session error type.
#[derive(Debug, Clone)]
pub struct SessionError {
    pub message: String,
}

impl SessionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session error: {}", self.message)
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

/// Runs the demonstration steps against one input and one output stream.
pub struct Session<R: BufRead, W: Write> {
    input: InputStream<R>,
    output: OutputStream<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: InputStream<R>, output: OutputStream<W>) -> Self {
        Session { input, output }
    }

    /// Execute every demonstration step in order. Parse failures and
    /// truncation stay silent per step; only real stream I/O errors
    /// come back as `Err`.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.pause()?;

        self.raw_output_demo()?;
        self.pause()?;

        self.float_formatting_demo()?;
        self.pause()?;

        self.string_input_demo()?;
        self.pause()?;

        self.numeric_input_demo()?;
        self.pause()?;

        Ok(())
    }

    /// Prompt-and-wait pacing gate: prompt, then swallow one input line.
    fn pause(&mut self) -> Result<(), SessionError> {
        self.output.write_str("Press enter to continue.")?;
        self.output.flush()?;
        self.input.discard_line()?;
        Ok(())
    }

    /// Raw character and bounded-string output.
    fn raw_output_demo(&mut self) -> Result<(), SessionError> {
        debug!("raw output demo");

        // A bare code point, no formatting involved.
        self.output.put(char::from(0xA5))?; // ¥
        self.output.put('\n')?;

        // Only the first four characters make it out.
        self.output.write_limited("words cannot describe", 4)?;
        Ok(())
    }

    /// Five writes of the same value under different formatting state,
    /// then the same thing once more as a single chained expression.
    fn float_formatting_demo(&mut self) -> Result<(), SessionError> {
        debug!("float formatting demo");

        self.output.write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;

        // Rounds to 3 significant digits; stays in effect from here on.
        self.output.precision(3).write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;

        // Width lasts for one write only, so it is set again each time.
        self.output.width(10).write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;

        self.output.width(10).fill('-').write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;

        self.output.width(10);
        self.output.fill('-');
        self.output.justify(Justify::Left);
        self.output.write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;

        // The same state changes composed left to right in one
        // expression, manipulator style.
        self.output
            .width(10)
            .fill('-')
            .justify(Justify::Left)
            .write_float(FLOAT_SAMPLE)?;
        self.output.newline()?;
        Ok(())
    }

    /// Token, get, and getline input, each echoed back.
    fn string_input_demo(&mut self) -> Result<(), SessionError> {
        debug!("string input demo");

        self.output.write_str("type something:")?;
        self.output.newline()?;
        let token = self.input.read_token()?;
        // The token read leaves the line terminator behind.
        self.input.discard_line()?;
        self.output.write_str("You typed: ")?;
        self.output.write_str(&token)?;
        self.output.newline()?;

        let mut words = LineBuffer::with_capacity(64);

        self.output.write_str("type something:")?;
        self.output.newline()?;
        self.input.get_into(&mut words)?;
        // get leaves the terminator in the stream as well.
        self.input.discard_line()?;
        self.output.write_str("You typed: ")?;
        self.output.write_str(words.as_str())?;
        self.output.newline()?;

        self.output.write_str("type something:")?;
        self.output.newline()?;
        // getline consumes the terminator, so no discard is needed.
        self.input.get_line_into(&mut words)?;
        self.output.write_str("You typed: ")?;
        self.output.write_str(words.as_str())?;
        self.output.newline()?;
        Ok(())
    }

    /// Typed extraction and leading-digits conversion, each echoed back.
    fn numeric_input_demo(&mut self) -> Result<(), SessionError> {
        debug!("numeric input demo");

        self.output.write_str("input a number: ")?;
        self.output.flush()?;
        // Stops at the first non-numeric character: "500BC" yields 500
        // and leaves "BC" in the stream for the discard to absorb.
        let x = self.input.read_int()?;
        self.input.discard_line()?;
        self.output.write_str("you input: ")?;
        self.output.write_int(x)?;
        self.output.newline()?;

        self.output.write_str("input a number: ")?;
        self.output.flush()?;
        let mut digits = LineBuffer::with_capacity(256);
        self.input.get_line_into(&mut digits)?;
        let parsed = parse_leading_int(digits.as_str());
        self.output.write_str("doubled: ")?;
        self.output.write_int(parsed.value.saturating_mul(2))?;
        self.output.newline()?;
        Ok(())
    }
}
