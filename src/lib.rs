//! Charset specification registry.
//!
//! This crate resolves a numeric [`CharsetId`] to the [`CharsetSpec`] that
//! converts bytes in that charset to and from Unicode, so that single-byte,
//! double-byte and variable-width charsets can all be driven through one
//! runtime dispatch point.
//!
//! # Example
//!
//! ```
//! use charspec::{CharsetId, EncodeError};
//!
//! // Dispatch on an identifier, e.g. one read from a saved configuration
//! let cp1252 = charspec::find(CharsetId::WINDOWS_1252).unwrap();
//! let text = cp1252.decode_to_vec(b"\x93quoted\x94").unwrap();
//! assert_eq!(text.iter().collect::<String>(), "\u{201C}quoted\u{201D}");
//!
//! // Errors surface unchanged; nothing is substituted
//! let ascii = charspec::find(CharsetId::US_ASCII).unwrap();
//! assert_eq!(
//!     ascii.encode("naïve".chars()),
//!     Err(EncodeError::Unrepresentable { code_point: 'ï', index: 2 }),
//! );
//!
//! // Discovery
//! assert!(charspec::list().unwrap().any(|(_, name)| name == "UTF-8"));
//! ```
//!
//! # Plug-in charsets
//!
//! Crates can add charsets to the process-wide registry at link time:
//!
//! ```
//! use charspec::{ByteWidth, Charset, CharsetId, Encoding};
//!
//! struct Rot13Ascii;
//!
//! impl Encoding for Rot13Ascii {
//!     const NAME: &'static str = "x-rot13";
//!     const WIDTH: ByteWidth = ByteWidth::Single;
//!     const MAX_CHAR_LEN: usize = 1;
//!
//!     fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
//!         let b = *bytes.get(offset)?;
//!         b.is_ascii().then(|| (rot13(b) as char, offset + 1))
//!     }
//!
//!     fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
//!         buf[0] = rot13(u8::try_from(c).ok().filter(u8::is_ascii)?);
//!         Some(1)
//!     }
//! }
//!
//! fn rot13(b: u8) -> u8 {
//!     match b {
//!         b'a'..=b'z' => (b - b'a' + 13) % 26 + b'a',
//!         b'A'..=b'Z' => (b - b'A' + 13) % 26 + b'A',
//!         _ => b,
//!     }
//! }
//!
//! static ROT13: Charset<Rot13Ascii> = Charset::new(CharsetId::new(9_013), &[]);
//! charspec::register_charset!(ROT13);
//!
//! let rot13 = charspec::find(CharsetId::new(9_013)).unwrap();
//! assert_eq!(rot13.decode_to_vec(b"Uryyb").unwrap().iter().collect::<String>(), "Hello");
//! ```

#![deny(missing_docs)]

/// The compiled-in charset table.
pub mod builtin;
/// The conversion contract and its adapters.
pub mod charset;
/// Single-byte codepage implementations.
pub mod codepages;
/// Static encoding trait.
pub mod encoding;
/// Error types for lookup and conversion.
pub mod error;
/// Charset identifiers.
pub mod id;
/// Registry construction, lookup and enumeration.
pub mod registry;
/// UTF-8 encoding implementation.
pub mod utf8;

/// UTF-16 and UCS-2 encoding implementations.
#[cfg(feature = "utf16")]
pub mod utf16;

// Re-export main types
pub use charset::{ByteWidth, Charset, CharsetSpec, Decode};
pub use encoding::Encoding;
pub use error::{DecodeError, EncodeError, LookupError, RegistryError, TranscodeError};
pub use id::CharsetId;
pub use registry::{Registration, Registry, find, find_by_name, list, specs, transcode};
pub use utf8::Utf8;

#[cfg(feature = "utf16")]
pub use utf16::{Ucs2Be, Utf16Be, Utf16Le};

#[doc(hidden)]
pub use inventory;

/// Adds a charset to the process-wide registry.
///
/// Takes the path of a `static` implementing [`CharsetSpec`]. The charset
/// is appended after the built-in table. Its identifier must not collide
/// with any other registered charset, or the registry fails to initialise.
#[macro_export]
macro_rules! register_charset {
    ($spec:path) => {
        $crate::inventory::submit! {
            $crate::registry::Registration::new(&$spec)
        }
    };
}
