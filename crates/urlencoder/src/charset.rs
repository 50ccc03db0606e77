//! Character classes used by the encoder.
//!
//! RFC 3986 §2.3 defines the *unreserved* characters, which never need
//! percent-encoding:
//!
//! ```text
//! unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! ```
//!
//! Callers can widen that set for a single [`encode_with`](crate::encode_with)
//! call through the [`SafeChars`] trait, e.g. to keep `=` and `?` readable in a
//! query string.

/// Uppercase hex digits used when emitting `%XX` triplets.
pub(crate) const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns `true` for RFC 3986 unreserved characters: `A-Z a-z 0-9 - _ . ~`.
///
/// ```
/// use urlencoder::is_unreserved;
/// assert!(is_unreserved('~'));
/// assert!(!is_unreserved(' '));
/// assert!(!is_unreserved('é'));
/// ```
#[inline]
pub fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '~')
}

/// A set of extra characters to leave unescaped for one encode call.
///
/// Implemented for a single `char` and for the usual character sequences, so
/// both `encode_with(s, '=')` and `encode_with(s, "=?")` work. Characters that
/// are already unreserved are accepted and change nothing.
///
/// `%` is never honoured as a safe character: the encoder always writes it as
/// `%25`, since a bare `%` would be decoded as the start of an escape.
pub trait SafeChars {
    /// Whether `ch` should be copied through unescaped.
    fn is_safe(&self, ch: char) -> bool;
}

impl SafeChars for char {
    #[inline]
    fn is_safe(&self, ch: char) -> bool {
        *self == ch
    }
}

impl SafeChars for str {
    fn is_safe(&self, ch: char) -> bool {
        self.contains(ch)
    }
}

impl SafeChars for String {
    fn is_safe(&self, ch: char) -> bool {
        self.as_str().is_safe(ch)
    }
}

impl SafeChars for [char] {
    fn is_safe(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}

impl<const N: usize> SafeChars for [char; N] {
    fn is_safe(&self, ch: char) -> bool {
        self.as_slice().is_safe(ch)
    }
}

impl SafeChars for Vec<char> {
    fn is_safe(&self, ch: char) -> bool {
        self.as_slice().is_safe(ch)
    }
}

impl<T: SafeChars + ?Sized> SafeChars for &T {
    #[inline]
    fn is_safe(&self, ch: char) -> bool {
        (**self).is_safe(ch)
    }
}

/// Decode one ASCII hex digit, accepting either case.
#[inline]
pub(crate) fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
