//! Percent-encoder — converts arbitrary text into an RFC 3986 safe form.
//!
//! Every character outside the unreserved set (and outside the caller's safe
//! set, if any) is replaced by one `%XX` triplet per byte of its UTF-8
//! encoding, with uppercase hex digits:
//!
//! - `' '` → `%20` (space is never written as `+`)
//! - `'é'` (U+00E9, bytes `C3 A9`) → `%C3%A9`
//! - `'😁'` (U+1F601) → `%F0%9F%98%81`
//!
//! # Example
//! ```
//! use urlencoder::{encode, encode_with};
//! assert_eq!(encode("a test &"), "a%20test%20%26");
//! assert_eq!(encode_with("?test=a test", "=?"), "?test=a%20test");
//! ```

use std::borrow::Cow;

use crate::charset::{is_unreserved, SafeChars, HEX_UPPER};

/// Percent-encode `source`, leaving only RFC 3986 unreserved characters as-is.
///
/// Returns the input borrowed when nothing needs escaping.
pub fn encode(source: &str) -> Cow<'_, str> {
    encode_with(source, "")
}

/// Percent-encode `source`, additionally leaving every character in `safe`
/// unescaped.
///
/// `safe` is consulted for this call only. It can be a single `char` or any
/// character sequence implementing [`SafeChars`]. `%` is always escaped, even
/// when listed in `safe`, so the output stays decodable:
///
/// ```
/// use urlencoder::encode_with;
/// assert_eq!(encode_with("?test=a test", ['=', '?']), "?test=a%20test");
/// assert_eq!(encode_with("aaa", 'a'), "aaa");
/// assert_eq!(encode_with("100%", '%'), "100%25");
/// ```
pub fn encode_with<S: SafeChars>(source: &str, safe: S) -> Cow<'_, str> {
    // A bare '%' would be read back as the start of an escape.
    let keep = |ch: char| is_unreserved(ch) || (ch != '%' && safe.is_safe(ch));

    // Fast path: scan for the first character that needs escaping.
    let first = match source.char_indices().find(|&(_, ch)| !keep(ch)) {
        Some((idx, _)) => idx,
        None => return Cow::Borrowed(source),
    };

    // Worst case every remaining byte becomes a 3-byte triplet.
    let mut out = String::with_capacity(first + (source.len() - first) * 3);
    out.push_str(&source[..first]);
    for ch in source[first..].chars() {
        if keep(ch) {
            out.push(ch);
        } else {
            push_escaped(ch, &mut out);
        }
    }
    Cow::Owned(out)
}

/// Append one `%XX` triplet per UTF-8 byte of `ch`.
fn push_escaped(ch: char, out: &mut String) {
    let mut buf = [0u8; 4];
    for &byte in ch.encode_utf8(&mut buf).as_bytes() {
        out.push('%');
        out.push(HEX_UPPER[(byte >> 4) as usize] as char);
        out.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
    }
}
