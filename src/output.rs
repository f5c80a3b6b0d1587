//! Formatted output stream with mutable formatting state.
//!
//! Wraps any `Write` sink and carries the numeric precision, field
//! width, fill character, and justification used by formatted writes.
//! Width is one-shot and resets after every formatted write; precision,
//! fill, and justification persist until changed. The state mutators
//! return `&mut Self` so a width/fill/justify/value sequence can be
//! composed left-to-right in a single expression.

use log::debug;
use std::io::{self, Write};

/// Field justification for padded writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

pub struct OutputStream<W: Write> {
    sink: W,
    precision: Option<usize>,
    width: usize,
    fill: char,
    justify: Justify,
}

impl<W: Write> OutputStream<W> {
    pub fn new(sink: W) -> Self {
        OutputStream {
            sink,
            precision: None,
            width: 0,
            fill: ' ',
            justify: Justify::Right,
        }
    }

    /// Write a single character as-is, bypassing the formatting state.
    pub fn put(&mut self, ch: char) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        self.sink.write_all(ch.encode_utf8(&mut utf8).as_bytes())
    }

    /// Write exactly the first `limit` characters of `text`: no padding,
    /// no terminator, content ignored past the limit.
    pub fn write_limited(&mut self, text: &str, limit: usize) -> io::Result<()> {
        let end = text
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        self.sink.write_all(text[..end].as_bytes())
    }

    /// Formatted string write: pads to the current width, then resets it.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.write_padded(text)
    }

    /// Formatted integer write. Precision does not apply to integers.
    pub fn write_int(&mut self, value: i32) -> io::Result<()> {
        self.write_padded(&value.to_string())
    }

    /// Formatted float write. With a precision set, the value is rounded
    /// to that many significant digits before padding; otherwise the
    /// shortest default representation is used.
    pub fn write_float(&mut self, value: f32) -> io::Result<()> {
        let rendered = match self.precision {
            Some(p) => format_significant(value, p),
            None => value.to_string(),
        };
        self.write_padded(&rendered)
    }

    /// Pad `rendered` to the current width with the current fill on the
    /// side the justification dictates. Width is consumed here; fill and
    /// justification are not.
    fn write_padded(&mut self, rendered: &str) -> io::Result<()> {
        let width = std::mem::take(&mut self.width);
        let chars = rendered.chars().count();
        if chars >= width {
            return self.sink.write_all(rendered.as_bytes());
        }
        debug!("padding '{}' to {} columns", rendered, width);
        let padding = self.fill.to_string().repeat(width - chars);
        match self.justify {
            Justify::Right => {
                self.sink.write_all(padding.as_bytes())?;
                self.sink.write_all(rendered.as_bytes())
            }
            Justify::Left => {
                self.sink.write_all(rendered.as_bytes())?;
                self.sink.write_all(padding.as_bytes())
            }
        }
    }

    /// Write a line terminator and flush.
    pub fn newline(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\n")?;
        self.sink.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Set the significant-digit precision for float writes. Persists.
    pub fn precision(&mut self, digits: usize) -> &mut Self {
        self.precision = Some(digits);
        self
    }

    /// Set the field width for the next formatted write only.
    pub fn width(&mut self, columns: usize) -> &mut Self {
        self.width = columns;
        self
    }

    /// Set the fill character used for padding. Persists.
    pub fn fill(&mut self, ch: char) -> &mut Self {
        self.fill = ch;
        self
    }

    /// Set the justification used for padding. Persists.
    pub fn justify(&mut self, justify: Justify) -> &mut Self {
        self.justify = justify;
        self
    }
}

/// Render `value` rounded to `digits` significant digits.
///
/// Notation selection follows the standard `%g` rule: with `e` the
/// decimal exponent of the rounded value, fixed notation when
/// `-4 <= e < p` (using `p - 1 - e` fractional digits), scientific
/// notation otherwise. Trailing zeros are stripped in both forms.
fn format_significant(value: f32, digits: usize) -> String {
    let p = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let negative = value < 0.0;
    let abs = value.abs();

    // Round to p significant digits before reading off the exponent:
    // 9.99999 at p = 3 is 10.0, exponent 1, not 0.
    let sci = format!("{:.*e}", p - 1, abs);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    let body = if exp >= -4 && exp < p as i32 {
        let frac_digits = (p as i32 - 1 - exp).max(0) as usize;
        let mut s = format!("{:.*}", frac_digits, abs);
        strip_trailing_zeros(&mut s);
        s
    } else {
        let mut m = mantissa.to_string();
        strip_trailing_zeros(&mut m);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", m, sign, exp.unsigned_abs())
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Remove trailing zeros after the decimal point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
