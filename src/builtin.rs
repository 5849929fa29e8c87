//! The compiled-in charset table.
//!
//! Each entry pairs an [`Encoding`](crate::Encoding) with its IANA MIBenum
//! identifier and aliases. [`BUILTIN`] fixes the order in which they appear
//! in the process-wide registry; plug-ins submitted with
//! [`register_charset!`](crate::register_charset) follow after them.

use crate::charset::{Charset, CharsetSpec};
use crate::codepages::{Ascii, Iso8859_1};
use crate::id::CharsetId;
use crate::utf8::Utf8;

#[cfg(feature = "codepages")]
use crate::codepages::{Cp1252, Iso8859_15};
#[cfg(feature = "utf16")]
use crate::utf16::{Ucs2Be, Utf16Be, Utf16Le};

/// US-ASCII.
pub static US_ASCII: Charset<Ascii> = Charset::new(
    CharsetId::US_ASCII,
    &[
        "ASCII",
        "ANSI_X3.4-1968",
        "iso-ir-6",
        "ISO646-US",
        "us",
        "IBM367",
        "cp367",
        "csASCII",
    ],
);

/// ISO-8859-1.
pub static ISO_8859_1: Charset<Iso8859_1> = Charset::new(
    CharsetId::ISO_8859_1,
    &[
        "ISO_8859-1",
        "ISO8859-1",
        "latin1",
        "l1",
        "iso-ir-100",
        "IBM819",
        "CP819",
        "csISOLatin1",
    ],
);

/// UTF-8.
pub static UTF_8: Charset<Utf8> = Charset::new(CharsetId::UTF_8, &["UTF8", "csUTF8"]);

/// ISO-8859-15.
#[cfg(feature = "codepages")]
pub static ISO_8859_15: Charset<Iso8859_15> = Charset::new(
    CharsetId::ISO_8859_15,
    &[
        "ISO_8859-15",
        "ISO8859-15",
        "Latin-9",
        "latin9",
        "csISO885915",
    ],
);

/// Windows-1252.
#[cfg(feature = "codepages")]
pub static WINDOWS_1252: Charset<Cp1252> = Charset::new(
    CharsetId::WINDOWS_1252,
    &["cp1252", "CP-1252", "csWindows1252"],
);

/// UCS-2, big-endian.
#[cfg(feature = "utf16")]
pub static UCS_2BE: Charset<Ucs2Be> =
    Charset::new(CharsetId::UCS_2BE, &["UCS-2", "UCS-2BE", "csUnicode"]);

/// UTF-16, big-endian.
#[cfg(feature = "utf16")]
pub static UTF_16BE: Charset<Utf16Be> =
    Charset::new(CharsetId::UTF_16BE, &["UTF16BE", "csUTF16BE"]);

/// UTF-16, little-endian.
#[cfg(feature = "utf16")]
pub static UTF_16LE: Charset<Utf16Le> =
    Charset::new(CharsetId::UTF_16LE, &["UTF16LE", "csUTF16LE"]);

/// Every built-in charset, in registry order.
pub static BUILTIN: &[&dyn CharsetSpec] = &[
    &US_ASCII,
    &ISO_8859_1,
    &UTF_8,
    #[cfg(feature = "codepages")]
    &ISO_8859_15,
    #[cfg(feature = "codepages")]
    &WINDOWS_1252,
    #[cfg(feature = "utf16")]
    &UCS_2BE,
    #[cfg(feature = "utf16")]
    &UTF_16BE,
    #[cfg(feature = "utf16")]
    &UTF_16LE,
];
