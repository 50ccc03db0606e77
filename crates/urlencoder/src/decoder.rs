//! Percent-decoder — converts `%XX` escaped text back into the original string.
//!
//! The decoder is a single left-to-right pass over the input bytes with three
//! states: *normal*, *expect first hex digit* and *expect second hex digit*.
//! Bytes other than `%` are copied through verbatim; each complete escape
//! contributes one byte. Once the scan finishes, the collected bytes must form
//! valid UTF-8.
//!
//! Input is treated as untrusted. Any of the following fails the whole call with
//! [`UrlEncoderError::InvalidEscapeSequence`]; nothing is ever partially decoded:
//!
//! - a trailing `%` or `%X` cut off by end of input
//! - a `%` followed by a non-hex character (`%xx`, `%-1`)
//! - escapes whose decoded bytes are not valid UTF-8 (`%C3` on its own)
//!
//! # Example
//! ```
//! use urlencoder::decode;
//! assert_eq!(decode("a%20test%20%26").unwrap(), "a test &");
//! assert!(decode("100%").is_err());
//! ```

use std::borrow::Cow;

use crate::charset::hex_value;
use crate::error::{Result, UrlEncoderError};

/// Decode a percent-encoded string.
///
/// Hex digits are accepted in either case. Input without any `%` is returned
/// borrowed.
pub fn decode(source: &str) -> Result<Cow<'_, str>> {
    if !source.contains('%') {
        return Ok(Cow::Borrowed(source));
    }

    let bytes = decode_bytes(source)?;
    String::from_utf8(bytes).map(Cow::Owned).map_err(|err| {
        let offset = err.utf8_error().valid_up_to();
        UrlEncoderError::invalid_escape(
            source_index(source, offset),
            "decoded bytes are not valid UTF-8",
        )
    })
}

/// Scanner state. `start` is the byte index of the `%` that opened the escape.
#[derive(Clone, Copy)]
enum State {
    Normal,
    FirstDigit { start: usize },
    SecondDigit { start: usize, high: u8 },
}

/// Run the escape scanner, producing the raw decoded bytes.
fn decode_bytes(source: &str) -> Result<Vec<u8>> {
    // Decoding never grows the input.
    let mut out = Vec::with_capacity(source.len());
    let mut state = State::Normal;

    for (i, &byte) in source.as_bytes().iter().enumerate() {
        state = match state {
            State::Normal if byte == b'%' => State::FirstDigit { start: i },
            State::Normal => {
                out.push(byte);
                State::Normal
            }
            State::FirstDigit { start } => match hex_value(byte) {
                Some(high) => State::SecondDigit { start, high },
                None => return Err(illegal_digits(source, start)),
            },
            State::SecondDigit { start, high } => match hex_value(byte) {
                Some(low) => {
                    out.push((high << 4) | low);
                    State::Normal
                }
                None => return Err(illegal_digits(source, start)),
            },
        };
    }

    match state {
        State::Normal => Ok(out),
        State::FirstDigit { start } | State::SecondDigit { start, .. } => {
            Err(UrlEncoderError::invalid_escape(
                start,
                format!("incomplete trailing escape {:?}", &source[start..]),
            ))
        }
    }
}

fn illegal_digits(source: &str, start: usize) -> UrlEncoderError {
    // The offending character may be multi-byte, so cut on char boundaries.
    let sequence: String = source[start..].chars().take(3).collect();
    UrlEncoderError::invalid_escape(
        start,
        format!("illegal characters in escape sequence {sequence:?}"),
    )
}

/// Map an offset in the decoded byte buffer back to a byte index in `source`.
///
/// Only called after a successful scan, so every `%` starts a full triplet.
fn source_index(source: &str, decoded_offset: usize) -> usize {
    let bytes = source.as_bytes();
    let mut index = 0;
    let mut produced = 0;
    while index < bytes.len() && produced < decoded_offset {
        index += if bytes[index] == b'%' { 3 } else { 1 };
        produced += 1;
    }
    index
}
