//! The conversion contract every registered charset satisfies.
//!
//! [`CharsetSpec`] is object-safe so the registry can hold a heterogeneous
//! set of charsets behind `&'static dyn CharsetSpec`. Most implementations
//! don't write it by hand: they implement the static [`Encoding`] trait on a
//! zero-sized type and wrap it in a [`Charset`], which assigns the
//! identifier and aliases.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::encoding::Encoding;
use crate::error::{DecodeError, EncodeError};
use crate::id::CharsetId;

/// Byte-width classification of a charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteWidth {
    /// Every character is exactly one byte.
    Single,
    /// Every character is exactly two bytes.
    Double,
    /// Characters occupy a varying number of bytes.
    Variable,
}

impl ByteWidth {
    /// Returns the number of bytes per character, if fixed.
    pub const fn bytes_per_char(self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::Double => Some(2),
            Self::Variable => None,
        }
    }

    /// Returns `true` for [`ByteWidth::Single`] and [`ByteWidth::Double`].
    pub const fn is_fixed(self) -> bool {
        !matches!(self, Self::Variable)
    }
}

/// One charset's conversion behaviour, as seen by the registry.
///
/// Implementations must be pure: the same input always yields the same
/// output, and distinct calls share no state.
pub trait CharsetSpec: Send + Sync + 'static {
    /// The stable identifier of this charset. Constant for the lifetime of
    /// the value.
    fn id(&self) -> CharsetId;

    /// The canonical, human-readable name.
    fn name(&self) -> &'static str;

    /// Alternative names accepted by name lookup.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// The byte-width classification.
    fn width(&self) -> ByteWidth;

    /// Whether every Unicode scalar value is representable.
    fn is_unicode(&self) -> bool;

    /// The maximum number of bytes one character occupies.
    fn max_char_len(&self) -> usize;

    /// Decodes one character at `offset`.
    ///
    /// Returns the character and the offset just past it, or `None` if the
    /// bytes at `offset` are malformed or truncated. Must not read past the
    /// end of `bytes`.
    fn decode_char_at(&self, bytes: &[u8], offset: usize) -> Option<(char, usize)>;

    /// Appends the encoding of `c` to `out` and returns the number of bytes
    /// written, or returns `None` and leaves `out` untouched if `c` is not
    /// representable.
    fn encode_char(&self, c: char, out: &mut Vec<u8>) -> Option<usize>;

    /// Returns `true` if `c` is representable.
    fn can_encode(&self, c: char) -> bool {
        let mut scratch = Vec::with_capacity(self.max_char_len());
        self.encode_char(c, &mut scratch).is_some()
    }

    /// Decodes all of `bytes`, appending the characters to `out`.
    ///
    /// The default steps through [`decode_char_at`](Self::decode_char_at).
    /// Charsets with shift state override this to decode in a single pass.
    /// On error, `out` holds the characters decoded before the offending
    /// sequence.
    fn decode_into(&self, bytes: &[u8], out: &mut Vec<char>) -> Result<(), DecodeError> {
        let mut offset = 0;
        while offset < bytes.len() {
            let (c, next) = step(self, bytes, offset)?;
            out.push(c);
            offset = next;
        }
        Ok(())
    }

    /// Encodes every character of `chars`, appending the bytes to `out`.
    ///
    /// The default encodes each character independently with
    /// [`encode_char`](Self::encode_char). Charsets with shift state
    /// override this to track the state across characters and to close the
    /// output in the initial state.
    fn encode_into(
        &self,
        chars: &mut dyn Iterator<Item = char>,
        out: &mut Vec<u8>,
    ) -> Result<(), EncodeError> {
        for (index, c) in chars.enumerate() {
            if self.encode_char(c, out).is_none() {
                return Err(EncodeError::Unrepresentable {
                    code_point: c,
                    index,
                });
            }
        }
        Ok(())
    }
}

/// Decodes one character at `offset`. A step must advance and stay in
/// bounds; anything else is a malformed sequence.
fn step<S>(spec: &S, bytes: &[u8], offset: usize) -> Result<(char, usize), DecodeError>
where
    S: CharsetSpec + ?Sized,
{
    match spec.decode_char_at(bytes, offset) {
        Some((c, next)) if next > offset && next <= bytes.len() => Ok((c, next)),
        _ => Err(DecodeError::InvalidSequence { position: offset }),
    }
}

impl dyn CharsetSpec {
    /// Decodes `bytes` lazily into characters.
    ///
    /// The iterator yields at most one error, for the first malformed or
    /// truncated sequence, and then stops. It steps through
    /// [`decode_char_at`](CharsetSpec::decode_char_at) and so bypasses an
    /// overridden [`decode_into`](CharsetSpec::decode_into); use
    /// [`decode_to_vec`](Self::decode_to_vec) for charsets with shift state.
    ///
    /// # Example
    ///
    /// ```
    /// use charspec::{CharsetId, DecodeError};
    ///
    /// let utf8 = charspec::find(CharsetId::UTF_8).unwrap();
    /// let decoded: Result<Vec<char>, _> = utf8.decode(b"ok\xE2\x82").collect();
    /// assert_eq!(decoded, Err(DecodeError::InvalidSequence { position: 2 }));
    /// ```
    pub fn decode<'a>(&'a self, bytes: &'a [u8]) -> Decode<'a> {
        Decode {
            spec: self,
            bytes,
            offset: 0,
            failed: false,
        }
    }

    /// Decodes all of `bytes`, stopping at the first invalid sequence.
    pub fn decode_to_vec(&self, bytes: &[u8]) -> Result<Vec<char>, DecodeError> {
        let mut out = Vec::with_capacity(bytes.len() / self.max_char_len().max(1));
        self.decode_into(bytes, &mut out)?;
        Ok(out)
    }

    /// Encodes `chars`, failing on the first character outside the
    /// repertoire. Nothing is substituted.
    pub fn encode<I>(&self, chars: I) -> Result<Vec<u8>, EncodeError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars = chars.into_iter();
        let mut out = Vec::with_capacity(chars.size_hint().0);
        self.encode_into(&mut chars, &mut out)?;
        Ok(out)
    }

    /// Returns the canonical name followed by every alias.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.name()).chain(self.aliases().iter().copied())
    }

    /// Checks if this charset answers to `name` (case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.all_names().any(|n| n.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for dyn CharsetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharsetSpec")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("width", &self.width())
            .finish()
    }
}

/// Lazy decoder returned by [`decode`](trait.CharsetSpec.html#method.decode).
pub struct Decode<'a> {
    spec: &'a dyn CharsetSpec,
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

impl Decode<'_> {
    /// The byte offset of the next character to decode.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Decode<'_> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match step(self.spec, self.bytes, self.offset) {
            Ok((c, next)) => {
                self.offset = next;
                Some(Ok(c))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // An error ends iteration early, so only one item is guaranteed.
        let remaining = self.bytes.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Decode<'_> {}

impl fmt::Debug for Decode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decode")
            .field("charset", &self.spec.name())
            .field("offset", &self.offset)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A registrable charset built from a static [`Encoding`].
///
/// # Example
///
/// ```
/// use charspec::{Charset, CharsetId, CharsetSpec, Utf8};
///
/// static MY_UTF8: Charset<Utf8> = Charset::new(CharsetId::new(9000), &["my-utf8"]);
/// let spec: &dyn CharsetSpec = &MY_UTF8;
/// assert_eq!(spec.name(), "UTF-8");
/// assert!(spec.matches("MY-UTF8"));
/// ```
pub struct Charset<E> {
    id: CharsetId,
    aliases: &'static [&'static str],
    _encoding: PhantomData<fn() -> E>,
}

impl<E: Encoding> Charset<E> {
    /// Pairs encoding `E` with an identifier and its aliases.
    pub const fn new(id: CharsetId, aliases: &'static [&'static str]) -> Self {
        Self {
            id,
            aliases,
            _encoding: PhantomData,
        }
    }
}

impl<E: Encoding> CharsetSpec for Charset<E> {
    #[inline]
    fn id(&self) -> CharsetId {
        self.id
    }

    #[inline]
    fn name(&self) -> &'static str {
        E::NAME
    }

    #[inline]
    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    #[inline]
    fn width(&self) -> ByteWidth {
        E::WIDTH
    }

    #[inline]
    fn is_unicode(&self) -> bool {
        E::IS_UNICODE
    }

    #[inline]
    fn max_char_len(&self) -> usize {
        E::MAX_CHAR_LEN
    }

    #[inline]
    fn decode_char_at(&self, bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        E::decode_char_at(bytes, offset)
    }

    fn encode_char(&self, c: char, out: &mut Vec<u8>) -> Option<usize> {
        let start = out.len();
        out.resize(start + E::MAX_CHAR_LEN, 0);
        match E::try_encode_char(c, &mut out[start..]) {
            Some(len) => {
                out.truncate(start + len);
                Some(len)
            }
            None => {
                out.truncate(start);
                None
            }
        }
    }

    #[inline]
    fn can_encode(&self, c: char) -> bool {
        E::can_encode(c)
    }
}

impl<E: Encoding> fmt::Debug for Charset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Charset")
            .field("id", &self.id)
            .field("name", &E::NAME)
            .field("aliases", &self.aliases)
            .finish()
    }
}
