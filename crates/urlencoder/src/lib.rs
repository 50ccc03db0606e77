//! # urlencoder
//!
//! Pure-Rust **percent-encoding** ("URL encoding") per RFC 3986.
//!
//! Characters in the unreserved set `A-Z a-z 0-9 - _ . ~` pass through unchanged.
//! Everything else is written as one `%XX` triplet per UTF-8 byte, with uppercase
//! hex digits. Space becomes `%20`, never `+`. Decoding reverses this exactly and
//! rejects malformed escapes instead of guessing.
//!
//! ## Quick start
//!
//! ```rust
//! use urlencoder::{decode, encode, encode_with};
//!
//! let encoded = encode("%#okékÉȢ smile!😁");
//! assert_eq!(encoded, "%25%23ok%C3%A9k%C3%89%C8%A2%20smile%21%F0%9F%98%81");
//!
//! // Roundtrip
//! assert_eq!(decode(&encoded).unwrap(), "%#okékÉȢ smile!😁");
//!
//! // Keep some reserved characters readable for this call only
//! assert_eq!(encode_with("?test=a test", "=?"), "?test=a%20test");
//! ```
//!
//! Both directions return [`Cow<str>`](std::borrow::Cow): input that needs no
//! change comes back borrowed, without allocating.
//!
//! ## Modules
//!
//! - [`encoder`] — text → percent-encoded text
//! - [`decoder`] — percent-encoded text → text
//! - [`charset`] — the unreserved set and the [`SafeChars`] trait
//! - [`error`] — Error type for malformed escapes

pub mod charset;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use charset::{is_unreserved, SafeChars};
pub use decoder::decode;
pub use encoder::{encode, encode_with};
pub use error::{Result, UrlEncoderError};
