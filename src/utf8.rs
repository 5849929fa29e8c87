use crate::charset::ByteWidth;
use crate::encoding::Encoding;

/// UTF-8 encoding marker.
///
/// Delegates validation to `core::str::from_utf8` one character at a time,
/// so overlong forms, surrogates and out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utf8;

impl Encoding for Utf8 {
    const NAME: &'static str = "UTF-8";
    const WIDTH: ByteWidth = ByteWidth::Variable;
    const MAX_CHAR_LEN: usize = 4;
    const IS_UNICODE: bool = true;

    #[inline]
    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let slice = bytes.get(offset..)?;

        // Get the first byte to determine character length
        let len = match *slice.first()? {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return None, // Continuation or invalid start byte
        };

        let char_bytes = slice.get(..len)?;
        let c = core::str::from_utf8(char_bytes).ok()?.chars().next()?;

        Some((c, offset + len))
    }

    #[inline]
    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        Some(c.encode_utf8(buf).len())
    }

    #[inline]
    fn can_encode(_c: char) -> bool {
        true
    }
}
