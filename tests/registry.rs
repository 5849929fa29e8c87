//! Dispatch and enumeration tests for the charset registry.

use std::collections::HashSet;

use charspec::builtin::BUILTIN;
use charspec::{
    ByteWidth, Charset, CharsetId, CharsetSpec, DecodeError, EncodeError, Encoding, LookupError,
    Registry, RegistryError,
};

// =============================================================================
// Test-local charsets
// =============================================================================

/// One byte per character, ASCII repertoire only.
struct SingleByteA;

impl Encoding for SingleByteA {
    const NAME: &'static str = "single-byte-A";
    const WIDTH: ByteWidth = ByteWidth::Single;
    const MAX_CHAR_LEN: usize = 1;

    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let b = *bytes.get(offset)?;
        b.is_ascii().then_some((b as char, offset + 1))
    }

    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        buf[0] = u8::try_from(c).ok().filter(u8::is_ascii)?;
        Some(1)
    }
}

/// Two bytes per character: a zero lead byte, then a Latin-1 byte.
struct DoubleByteB;

impl Encoding for DoubleByteB {
    const NAME: &'static str = "double-byte-B";
    const WIDTH: ByteWidth = ByteWidth::Double;
    const MAX_CHAR_LEN: usize = 2;

    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        match bytes.get(offset..offset + 2)? {
            &[0x00, b] => Some((b as char, offset + 2)),
            _ => None,
        }
    }

    fn try_encode_char(c: char, buf: &mut [u8]) -> Option<usize> {
        buf[0] = 0x00;
        buf[1] = u8::try_from(c).ok()?;
        Some(2)
    }
}

static A: Charset<SingleByteA> = Charset::new(CharsetId::new(1), &["a"]);
static B: Charset<DoubleByteB> = Charset::new(CharsetId::new(2), &["b"]);
static B_AGAIN: Charset<DoubleByteB> = Charset::new(CharsetId::new(1), &[]);

fn two_charsets() -> Registry {
    Registry::new([&A as &dyn CharsetSpec, &B]).unwrap()
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn find_returns_the_matching_spec_or_not_found() {
    let registry = two_charsets();

    let spec = registry.find(CharsetId::new(1)).unwrap();
    assert_eq!(spec.name(), "single-byte-A");
    assert_eq!(spec.width(), ByteWidth::Single);

    let spec = registry.find(CharsetId::new(2)).unwrap();
    assert_eq!(spec.name(), "double-byte-B");
    assert_eq!(spec.width(), ByteWidth::Double);

    assert_eq!(
        registry.find(CharsetId::new(3)).unwrap_err(),
        LookupError::NotFound(CharsetId::new(3))
    );
}

#[test]
fn list_yields_each_entry_once() {
    let listed: Vec<_> = two_charsets().list().collect();
    assert_eq!(
        listed,
        [
            (CharsetId::new(1), "single-byte-A"),
            (CharsetId::new(2), "double-byte-B"),
        ]
    );
}

#[test]
fn truncated_multibyte_sequence_reports_its_offset() {
    let utf8 = charspec::find(CharsetId::UTF_8).unwrap();
    let mut bytes = b"ab".to_vec();
    bytes.extend_from_slice(&"日".as_bytes()[..2]);
    assert_eq!(
        utf8.decode_to_vec(&bytes),
        Err(DecodeError::InvalidSequence { position: 2 })
    );

    let b = two_charsets().find(CharsetId::new(2)).unwrap();
    assert_eq!(
        b.decode_to_vec(&[0x00, b'x', 0x00]),
        Err(DecodeError::InvalidSequence { position: 2 })
    );
}

#[test]
fn unrepresentable_code_point_is_reported() {
    let ascii = charspec::find(CharsetId::US_ASCII).unwrap();
    assert_eq!(
        ascii.encode(['h', 'é'].into_iter()),
        Err(EncodeError::Unrepresentable {
            code_point: 'é',
            index: 1
        })
    );

    let a = two_charsets().find(CharsetId::new(1)).unwrap();
    assert_eq!(
        a.encode("ab\u{FFFD}".chars()).unwrap_err().code_point(),
        '\u{FFFD}'
    );
}

// =============================================================================
// Construction invariants
// =============================================================================

#[test]
fn duplicate_identifier_fails_construction() {
    let err = Registry::new([&A as &dyn CharsetSpec, &B, &B_AGAIN]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateIdentifier {
            id: CharsetId::new(1),
            first: "single-byte-A",
            first_index: 0,
            second: "double-byte-B",
            second_index: 2,
        }
    );
}

#[test]
fn empty_list_fails_construction() {
    let specs: Vec<&'static dyn CharsetSpec> = Vec::new();
    assert_eq!(Registry::new(specs).unwrap_err(), RegistryError::Empty);
}

// =============================================================================
// Process-wide registry
// =============================================================================

#[test]
fn every_registered_id_resolves_to_itself() {
    for (id, name) in charspec::list().unwrap() {
        let spec = charspec::find(id).unwrap();
        assert_eq!(spec.id(), id);
        assert_eq!(spec.name(), name);
    }
}

#[test]
fn unregistered_ids_are_not_found() {
    let registered: HashSet<_> = charspec::list().unwrap().map(|(id, _)| id).collect();
    let probes = [
        CharsetId::UNSPECIFIED,
        CharsetId::new(0),
        CharsetId::new(-42),
        CharsetId::new(i32::MIN),
        CharsetId::new(i32::MAX),
    ];
    for id in probes {
        assert!(!registered.contains(&id));
        assert_eq!(charspec::find(id).unwrap_err(), LookupError::NotFound(id));
    }
}

#[test]
fn list_covers_the_builtin_table_without_duplicates() {
    let listed: Vec<_> = charspec::list().unwrap().collect();
    assert_eq!(listed.len(), BUILTIN.len());

    let ids: HashSet<_> = listed.iter().map(|&(id, _)| id).collect();
    assert_eq!(ids.len(), listed.len());

    let expected: Vec<_> = BUILTIN.iter().map(|spec| (spec.id(), spec.name())).collect();
    assert_eq!(listed, expected);
}

#[test]
fn list_is_stable_across_calls() {
    let first: Vec<_> = charspec::list().unwrap().collect();
    let second: Vec<_> = charspec::list().unwrap().collect();
    assert_eq!(first, second);
    assert_eq!(charspec::specs().unwrap().len(), first.len());
}

#[test]
fn builtin_ids_are_stable() {
    let expected = [
        ("US-ASCII", 3),
        ("ISO-8859-1", 4),
        ("UTF-8", 106),
        #[cfg(feature = "codepages")]
        ("ISO-8859-15", 111),
        #[cfg(feature = "codepages")]
        ("windows-1252", 2252),
        #[cfg(feature = "utf16")]
        ("ISO-10646-UCS-2", 1000),
        #[cfg(feature = "utf16")]
        ("UTF-16BE", 1013),
        #[cfg(feature = "utf16")]
        ("UTF-16LE", 1014),
    ];
    for (name, raw) in expected {
        assert_eq!(charspec::find_by_name(name).unwrap().id().get(), raw, "{name}");
    }
}

#[test]
fn find_by_name_accepts_aliases() {
    assert_eq!(
        charspec::find_by_name("csASCII").unwrap().id(),
        CharsetId::US_ASCII
    );
    assert_eq!(charspec::find_by_name("utf8").unwrap().id(), CharsetId::UTF_8);
    assert_eq!(
        charspec::find_by_name("EBCDIC-US").unwrap_err(),
        LookupError::UnknownName("EBCDIC-US".to_string())
    );
}

#[test]
fn concurrent_lookups_see_one_registry() {
    let expected: Vec<_> = charspec::list().unwrap().collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let registry = charspec::registry::global().unwrap();
                    for &(id, name) in &expected {
                        assert_eq!(charspec::find(id).unwrap().name(), name);
                    }
                    assert!(charspec::find(CharsetId::UNSPECIFIED).is_err());
                    (
                        registry as *const Registry as usize,
                        charspec::list().unwrap().collect::<Vec<_>>(),
                    )
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (addr, listed) in &results {
            assert_eq!(*addr, results[0].0);
            assert_eq!(listed, &expected);
        }
    });
}

#[test]
fn transcode_between_registered_charsets() {
    assert_eq!(
        charspec::transcode("€".as_bytes(), CharsetId::UTF_8, CharsetId::ISO_8859_1),
        Err(charspec::TranscodeError::Encode(
            EncodeError::Unrepresentable {
                code_point: '€',
                index: 0
            }
        ))
    );

    #[cfg(feature = "codepages")]
    assert_eq!(
        charspec::transcode("€".as_bytes(), CharsetId::UTF_8, CharsetId::WINDOWS_1252),
        Ok(vec![0x80])
    );
}
