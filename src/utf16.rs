//! UTF-16 and UCS-2.
//!
//! UTF-16 is variable width: BMP characters take one 16-bit unit and
//! supplementary characters take a surrogate pair. UCS-2 is the fixed
//! two-byte subset that only covers the BMP; surrogate code units and
//! supplementary characters are invalid in it.

use crate::charset::ByteWidth;
use crate::encoding::Encoding;

// Surrogate range constants
const SURROGATE_HIGH_START: u16 = 0xD800;
const SURROGATE_HIGH_END: u16 = 0xDBFF;
const SURROGATE_LOW_START: u16 = 0xDC00;
const SURROGATE_LOW_END: u16 = 0xDFFF;

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (SURROGATE_HIGH_START..=SURROGATE_HIGH_END).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (SURROGATE_LOW_START..=SURROGATE_LOW_END).contains(&unit)
}

/// Reads the 16-bit unit at `offset`, or `None` if fewer than two bytes remain.
#[inline]
fn unit_at(bytes: &[u8], offset: usize, from_bytes: fn([u8; 2]) -> u16) -> Option<u16> {
    match bytes.get(offset..offset.checked_add(2)?)? {
        &[a, b] => Some(from_bytes([a, b])),
        _ => None,
    }
}

fn decode_utf16(
    bytes: &[u8],
    offset: usize,
    from_bytes: fn([u8; 2]) -> u16,
) -> Option<(char, usize)> {
    let unit = unit_at(bytes, offset, from_bytes)?;

    if is_high_surrogate(unit) {
        // Surrogate pair; a missing or mismatched low half fails at `offset`.
        let low = unit_at(bytes, offset + 2, from_bytes)?;
        if !is_low_surrogate(low) {
            return None;
        }
        let high = unit - SURROGATE_HIGH_START;
        let low = low - SURROGATE_LOW_START;
        let cp = 0x10000 + ((high as u32) << 10) + (low as u32);
        Some((char::from_u32(cp)?, offset + 4))
    } else if is_low_surrogate(unit) {
        // Lone low surrogate
        None
    } else {
        Some((char::from_u32(unit as u32)?, offset + 2))
    }
}

fn encode_utf16(c: char, buf: &mut [u8], to_bytes: fn(u16) -> [u8; 2]) -> usize {
    let mut units = [0u16; 2];
    let units = c.encode_utf16(&mut units);
    for (i, unit) in units.iter().enumerate() {
        buf[i * 2..i * 2 + 2].copy_from_slice(&to_bytes(*unit));
    }
    units.len() * 2
}

macro_rules! utf16_encoding {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $from:path, $to:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $ty;

        impl Encoding for $ty {
            const NAME: &'static str = $name;
            const WIDTH: ByteWidth = ByteWidth::Variable;
            const MAX_CHAR_LEN: usize = 4;
            const IS_UNICODE: bool = true;

            #[inline]
            fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
                decode_utf16(bytes, offset, $from)
            }

            #[inline]
            fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
                Some(encode_utf16(c, buf, $to))
            }

            #[inline]
            fn can_encode(_c: char) -> bool {
                true
            }
        }
    };
}

utf16_encoding!(
    /// UTF-16, big-endian, no byte order mark.
    Utf16Be,
    "UTF-16BE",
    u16::from_be_bytes,
    u16::to_be_bytes
);

utf16_encoding!(
    /// UTF-16, little-endian, no byte order mark.
    Utf16Le,
    "UTF-16LE",
    u16::from_le_bytes,
    u16::to_le_bytes
);

/// UCS-2, big-endian (`ISO-10646-UCS-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ucs2Be;

impl Encoding for Ucs2Be {
    const NAME: &'static str = "ISO-10646-UCS-2";
    const WIDTH: ByteWidth = ByteWidth::Double;
    const MAX_CHAR_LEN: usize = 2;

    #[inline]
    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let unit = unit_at(bytes, offset, u16::from_be_bytes)?;
        // Surrogates fall out here: they are not scalar values.
        Some((char::from_u32(unit as u32)?, offset + 2))
    }

    #[inline]
    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        let unit = u16::try_from(c as u32).ok()?;
        buf[..2].copy_from_slice(&unit.to_be_bytes());
        Some(2)
    }

    #[inline]
    fn can_encode(c: char) -> bool {
        (c as u32) < 0x10000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bmp() {
        assert_eq!(Utf16Be::decode_char_at(&[0x00, 0x41], 0), Some(('A', 2)));
        assert_eq!(Utf16Le::decode_char_at(&[0x41, 0x00], 0), Some(('A', 2)));
        assert_eq!(Utf16Be::decode_char_at(&[0x4E, 0x2D], 0), Some(('中', 2)));
    }

    #[test]
    fn test_decode_surrogate_pair() {
        // U+1F600 = D83D DE00
        let be = [0xD8, 0x3D, 0xDE, 0x00];
        let le = [0x3D, 0xD8, 0x00, 0xDE];
        assert_eq!(Utf16Be::decode_char_at(&be, 0), Some(('\u{1F600}', 4)));
        assert_eq!(Utf16Le::decode_char_at(&le, 0), Some(('\u{1F600}', 4)));
    }

    #[test]
    fn test_decode_invalid() {
        // Odd trailing byte
        assert_eq!(Utf16Be::decode_char_at(&[0x00, 0x41, 0x00], 2), None);
        // High surrogate with no low half
        assert_eq!(Utf16Be::decode_char_at(&[0xD8, 0x3D], 0), None);
        assert_eq!(Utf16Be::decode_char_at(&[0xD8, 0x3D, 0xDE], 0), None);
        // High surrogate followed by a BMP unit
        assert_eq!(Utf16Be::decode_char_at(&[0xD8, 0x3D, 0x00, 0x41], 0), None);
        // Lone low surrogate
        assert_eq!(Utf16Be::decode_char_at(&[0xDE, 0x00], 0), None);
        assert_eq!(Utf16Be::decode_char_at(&[], 0), None);
        assert_eq!(Utf16Be::decode_char_at(&[0x00, 0x41], usize::MAX), None);
    }

    #[test]
    fn test_encode() {
        let mut buf = [0u8; 4];
        assert_eq!(Utf16Be::try_encode_char('A', &mut buf), Some(2));
        assert_eq!(&buf[..2], &[0x00, 0x41]);
        assert_eq!(Utf16Le::try_encode_char('A', &mut buf), Some(2));
        assert_eq!(&buf[..2], &[0x41, 0x00]);
        assert_eq!(Utf16Be::try_encode_char('\u{1F600}', &mut buf), Some(4));
        assert_eq!(buf, [0xD8, 0x3D, 0xDE, 0x00]);
        assert_eq!(Utf16Le::try_encode_char('\u{1F600}', &mut buf), Some(4));
        assert_eq!(buf, [0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_roundtrip_all_bmp() {
        let mut buf = [0u8; 4];
        for cp in (0u32..0x10000).step_by(97) {
            let Some(c) = char::from_u32(cp) else {
                continue;
            };
            let len = Utf16Le::try_encode_char(c, &mut buf).unwrap();
            assert_eq!(Utf16Le::decode_char_at(&buf[..len], 0), Some((c, len)));
        }
    }

    #[test]
    fn test_ucs2_is_bmp_only() {
        let mut buf = [0u8; 2];
        assert_eq!(Ucs2Be::try_encode_char('中', &mut buf), Some(2));
        assert_eq!(buf, [0x4E, 0x2D]);
        assert_eq!(Ucs2Be::decode_char_at(&buf, 0), Some(('中', 2)));
        assert_eq!(Ucs2Be::try_encode_char('\u{1F600}', &mut buf), None);
        assert!(!Ucs2Be::can_encode('\u{10000}'));
        assert_eq!(Ucs2Be::decode_char_at(&[0xD8, 0x3D, 0xDE, 0x00], 0), None);
        assert_eq!(Ucs2Be::decode_char_at(&[0x00], 0), None);
    }
}
