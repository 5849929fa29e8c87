//! ISO-8859-15 (Latin-9).
//!
//! Latin-1 with eight positions reassigned, adding the euro sign and the
//! French and Finnish letters Latin-1 lacks.

use super::Override;

/// ISO-8859-15 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Iso8859_15;

const OVERRIDES: &[Override] = &[
    (0xA4, Some('\u{20AC}')),
    (0xA6, Some('\u{0160}')),
    (0xA8, Some('\u{0161}')),
    (0xB4, Some('\u{017D}')),
    (0xB8, Some('\u{017E}')),
    (0xBC, Some('\u{0152}')),
    (0xBD, Some('\u{0153}')),
    (0xBE, Some('\u{0178}')),
];

latin1_codepage!(Iso8859_15, "ISO-8859-15", OVERRIDES);
