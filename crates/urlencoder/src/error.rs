//! Error types for percent-decoding.

use thiserror::Error;

/// Errors that can occur while decoding a percent-encoded string.
///
/// Encoding is total, so every variant here originates in [`decode`](crate::decode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlEncoderError {
    /// A `%` escape was truncated, contained non-hex digits, or the decoded
    /// bytes were not valid UTF-8.
    /// `index` is the byte offset of the offending `%` in the input.
    #[error("invalid escape sequence at index {index}: {message}")]
    InvalidEscapeSequence { index: usize, message: String },
}

impl UrlEncoderError {
    pub(crate) fn invalid_escape(index: usize, message: impl Into<String>) -> Self {
        UrlEncoderError::InvalidEscapeSequence {
            index,
            message: message.into(),
        }
    }

    /// Byte offset in the decoder input where the failure was detected.
    pub fn index(&self) -> usize {
        match self {
            UrlEncoderError::InvalidEscapeSequence { index, .. } => *index,
        }
    }
}

/// Convenience alias used throughout urlencoder.
pub type Result<T> = std::result::Result<T, UrlEncoderError>;
