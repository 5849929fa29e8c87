//! Windows code page 1252 (Western European).
//!
//! Latin-1 with the C1 control range 0x80-0x9F replaced by typographic
//! punctuation and a few letters. Bytes 0x81, 0x8D, 0x8F, 0x90 and 0x9D are
//! unassigned and fail to decode.

use super::Override;

/// Windows-1252 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cp1252;

const OVERRIDES: &[Override] = &[
    (0x80, Some('\u{20AC}')),
    (0x81, None),
    (0x82, Some('\u{201A}')),
    (0x83, Some('\u{0192}')),
    (0x84, Some('\u{201E}')),
    (0x85, Some('\u{2026}')),
    (0x86, Some('\u{2020}')),
    (0x87, Some('\u{2021}')),
    (0x88, Some('\u{02C6}')),
    (0x89, Some('\u{2030}')),
    (0x8A, Some('\u{0160}')),
    (0x8B, Some('\u{2039}')),
    (0x8C, Some('\u{0152}')),
    (0x8D, None),
    (0x8E, Some('\u{017D}')),
    (0x8F, None),
    (0x90, None),
    (0x91, Some('\u{2018}')),
    (0x92, Some('\u{2019}')),
    (0x93, Some('\u{201C}')),
    (0x94, Some('\u{201D}')),
    (0x95, Some('\u{2022}')),
    (0x96, Some('\u{2013}')),
    (0x97, Some('\u{2014}')),
    (0x98, Some('\u{02DC}')),
    (0x99, Some('\u{2122}')),
    (0x9A, Some('\u{0161}')),
    (0x9B, Some('\u{203A}')),
    (0x9C, Some('\u{0153}')),
    (0x9D, None),
    (0x9E, Some('\u{017E}')),
    (0x9F, Some('\u{0178}')),
];

latin1_codepage!(Cp1252, "windows-1252", OVERRIDES);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;

    #[test]
    fn c1_range_is_punctuation() {
        assert_eq!(Cp1252::decode_char_at(&[0x80], 0), Some(('€', 1)));
        assert_eq!(Cp1252::decode_char_at(&[0x93], 0), Some(('\u{201C}', 1)));
        assert_eq!(Cp1252::decode_char_at(&[0x99], 0), Some(('™', 1)));
    }

    #[test]
    fn unassigned_bytes_do_not_decode() {
        for b in [0x81, 0x8D, 0x8F, 0x90, 0x9D] {
            assert_eq!(Cp1252::decode_char_at(&[b], 0), None, "byte {b:02X}");
        }
    }

    #[test]
    fn c1_controls_are_unrepresentable() {
        let mut buf = [0u8; 1];
        assert_eq!(Cp1252::try_encode_char('\u{81}', &mut buf), None);
        assert_eq!(Cp1252::try_encode_char('\u{80}', &mut buf), None);
        assert_eq!(Cp1252::try_encode_char('é', &mut buf), Some(1));
        assert_eq!(buf, [0xE9]);
        assert!(!Cp1252::can_encode('中'));
    }
}
