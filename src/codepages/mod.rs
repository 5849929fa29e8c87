//! Single-byte codepages.
//!
//! Every codepage here is ASCII-compatible. The Latin-1 family is described
//! as a set of differences from ISO-8859-1, which keeps each table to the
//! handful of bytes that actually change.
//!
//! # Example
//!
//! ```
//! use charspec::Encoding;
//! use charspec::codepages::Iso8859_1;
//!
//! assert!(Iso8859_1::can_encode('é'));
//! assert!(!Iso8859_1::can_encode('€'));
//! ```

use crate::charset::ByteWidth;
use crate::encoding::Encoding;

/// US-ASCII. Bytes 0x80-0xFF are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ascii;

impl Encoding for Ascii {
    const NAME: &'static str = "US-ASCII";
    const WIDTH: ByteWidth = ByteWidth::Single;
    const MAX_CHAR_LEN: usize = 1;

    #[inline]
    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let b = *bytes.get(offset)?;
        b.is_ascii().then_some((b as char, offset + 1))
    }

    #[inline]
    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        buf[0] = c as u8;
        Some(1)
    }

    #[inline]
    fn can_encode(c: char) -> bool {
        c.is_ascii()
    }
}

/// ISO-8859-1 (Latin-1). Byte `n` is code point `U+00nn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Iso8859_1;

impl Encoding for Iso8859_1 {
    const NAME: &'static str = "ISO-8859-1";
    const WIDTH: ByteWidth = ByteWidth::Single;
    const MAX_CHAR_LEN: usize = 1;

    #[inline]
    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let b = *bytes.get(offset)?;
        Some((b as char, offset + 1))
    }

    #[inline]
    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        buf[0] = u8::try_from(c).ok()?;
        Some(1)
    }

    #[inline]
    fn can_encode(c: char) -> bool {
        u8::try_from(c).is_ok()
    }
}

/// A byte whose meaning differs from ISO-8859-1, and what it maps to
/// instead (`None` for an unassigned byte).
#[cfg(feature = "codepages")]
pub(crate) type Override = (u8, Option<char>);

/// Decodes byte `b` against a Latin-1 override table.
#[cfg(feature = "codepages")]
pub(crate) fn decode_with(overrides: &[Override], b: u8) -> Option<char> {
    if b < 0x80 {
        return Some(b as char);
    }
    match overrides.iter().find(|&&(byte, _)| byte == b) {
        Some(&(_, mapped)) => mapped,
        None => Some(b as char),
    }
}

/// Encodes `c` against a Latin-1 override table.
#[cfg(feature = "codepages")]
pub(crate) fn encode_with(overrides: &[Override], c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }
    if let Some(&(byte, _)) = overrides.iter().find(|&&(_, mapped)| mapped == Some(c)) {
        return Some(byte);
    }
    // Latin-1 identity, unless the byte was reassigned.
    let b = u8::try_from(c).ok()?;
    if overrides.iter().any(|&(byte, _)| byte == b) {
        None
    } else {
        Some(b)
    }
}

/// Implements [`Encoding`] for a Latin-1 derived codepage.
#[cfg(feature = "codepages")]
macro_rules! latin1_codepage {
    ($ty:ty, $name:literal, $overrides:expr) => {
        impl $crate::encoding::Encoding for $ty {
            const NAME: &'static str = $name;
            const WIDTH: $crate::charset::ByteWidth = $crate::charset::ByteWidth::Single;
            const MAX_CHAR_LEN: usize = 1;

            #[inline]
            fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
                let b = *bytes.get(offset)?;
                let c = $crate::codepages::decode_with($overrides, b)?;
                Some((c, offset + 1))
            }

            #[inline]
            fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
                buf[0] = $crate::codepages::encode_with($overrides, c)?;
                Some(1)
            }

            #[inline]
            fn can_encode(c: char) -> bool {
                $crate::codepages::encode_with($overrides, c).is_some()
            }
        }
    };
}

#[cfg(feature = "codepages")]
mod latin9;
#[cfg(feature = "codepages")]
mod windows;

#[cfg(feature = "codepages")]
pub use latin9::Iso8859_15;
#[cfg(feature = "codepages")]
pub use windows::Cp1252;
