//! Stable numeric charset identifiers.

use core::fmt;

/// An integer that names exactly one charset.
///
/// Identifiers are compared for equality only; they carry no ordering. The
/// built-in constants use the IANA character-set MIBenum values, so a value
/// persisted in a saved configuration keeps its meaning across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharsetId(i32);

impl CharsetId {
    /// Sentinel used by callers to mean "no charset chosen".
    ///
    /// Never registered; looking it up always fails.
    pub const UNSPECIFIED: CharsetId = CharsetId(-1);

    /// US-ASCII.
    pub const US_ASCII: CharsetId = CharsetId(3);
    /// ISO-8859-1 (Latin-1).
    pub const ISO_8859_1: CharsetId = CharsetId(4);
    /// UTF-8.
    pub const UTF_8: CharsetId = CharsetId(106);
    /// ISO-8859-15 (Latin-9).
    pub const ISO_8859_15: CharsetId = CharsetId(111);
    /// UCS-2, big-endian (`ISO-10646-UCS-2`).
    pub const UCS_2BE: CharsetId = CharsetId(1000);
    /// UTF-16, big-endian.
    pub const UTF_16BE: CharsetId = CharsetId(1013);
    /// UTF-16, little-endian.
    pub const UTF_16LE: CharsetId = CharsetId(1014);
    /// Windows code page 1252.
    pub const WINDOWS_1252: CharsetId = CharsetId(2252);

    /// Wraps a raw identifier value.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CharsetId {
    #[inline]
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<CharsetId> for i32 {
    #[inline]
    fn from(id: CharsetId) -> Self {
        id.0
    }
}

impl fmt::Display for CharsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_round_trips() {
        assert_eq!(CharsetId::new(2252).get(), 2252);
        assert_eq!(i32::from(CharsetId::from(-7)), -7);
        assert_eq!(CharsetId::from(106), CharsetId::UTF_8);
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(CharsetId::UTF_8.to_string(), "#106");
        assert_eq!(CharsetId::UNSPECIFIED.to_string(), "#-1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&CharsetId::WINDOWS_1252).unwrap(), "2252");
        let id: CharsetId = serde_json::from_str("106").unwrap();
        assert_eq!(id, CharsetId::UTF_8);
    }
}
