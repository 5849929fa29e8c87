//! Static encoding trait for writing charset implementations.
//!
//! An [`Encoding`] is a zero-sized type whose associated functions do the
//! byte-level work for one charset. It carries no identifier: that is
//! assigned when the encoding is wrapped in a [`Charset`](crate::Charset)
//! and registered.
//!
//! # Example
//!
//! ```
//! use charspec::{ByteWidth, Encoding, Utf8};
//!
//! assert_eq!(Utf8::NAME, "UTF-8");
//! assert_eq!(Utf8::WIDTH, ByteWidth::Variable);
//! assert_eq!(Utf8::MAX_CHAR_LEN, 4);
//!
//! let mut buf = [0u8; 4];
//! let len = Utf8::try_encode_char('\u{1F600}', &mut buf).unwrap();
//! assert_eq!(len, 4);
//! assert_eq!(Utf8::decode_char_at(&buf, 0), Some(('\u{1F600}', 4)));
//! ```

use crate::charset::ByteWidth;

/// A trait defining the byte-level behaviour of a charset.
///
/// Implementors are zero-sized types (ZSTs). All operations are static
/// methods over the input plus the implementor's own fixed tables.
pub trait Encoding: Sized + 'static {
    /// The canonical name of this encoding (e.g., "UTF-8", "ISO-8859-1").
    const NAME: &'static str;

    /// How many bytes a character occupies.
    const WIDTH: ByteWidth;

    /// The maximum number of bytes a single character can occupy.
    const MAX_CHAR_LEN: usize;

    /// Whether this encoding can represent every Unicode scalar value.
    const IS_UNICODE: bool = false;

    /// Decodes a character starting at the given byte offset.
    ///
    /// Returns `Some((char, next_offset))` where `next_offset` is the byte index
    /// immediately after the decoded character, or `None` if the bytes at
    /// `offset` do not form a complete, valid character. Must not read past
    /// the end of `bytes`.
    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)>;

    /// Attempts to encode a character into the given buffer.
    ///
    /// Returns `Some(bytes_written)`, or `None` if the character is outside
    /// this encoding's repertoire.
    ///
    /// # Panics
    ///
    /// May panic if `buf` is shorter than [`Self::MAX_CHAR_LEN`].
    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize>;

    /// Returns `true` if this encoding can represent the given character.
    ///
    /// The default encodes into a scratch buffer of 8 bytes; encodings with a
    /// larger [`Self::MAX_CHAR_LEN`] must override it.
    fn can_encode(c: char) -> bool {
        let mut buf = [0u8; 8];
        Self::try_encode_char(c, &mut buf).is_some()
    }
}
