use crate::id::CharsetId;

/// A byte sequence that is not valid for the charset being decoded.
///
/// Truncated trailing sequences are reported the same way: `position` is the
/// offset of the first byte of the sequence that could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The sequence starting at `position` is malformed or incomplete.
    #[error("invalid byte sequence at offset {position}")]
    InvalidSequence {
        /// Byte offset where the offending sequence starts.
        position: usize,
    },
}

impl DecodeError {
    /// Returns the byte offset of the offending sequence.
    #[inline]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidSequence { position } => *position,
        }
    }
}

/// A character that the target charset cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// `code_point` has no encoding in the target charset.
    #[error(
        "character {code_point:?} (U+{:04X}) at index {index} is not representable",
        u32::from(*.code_point)
    )]
    Unrepresentable {
        /// The character that couldn't be encoded.
        code_point: char,
        /// The index (in characters) of the character in the input.
        index: usize,
    },
}

impl EncodeError {
    /// Returns the character that couldn't be encoded.
    #[inline]
    pub const fn code_point(&self) -> char {
        match self {
            Self::Unrepresentable { code_point, .. } => *code_point,
        }
    }
}

/// The charset table could not be turned into a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two specifications claim the same identifier.
    #[error(
        "charset identifier {id} is claimed by both {first} (entry {first_index}) \
         and {second} (entry {second_index})"
    )]
    DuplicateIdentifier {
        /// The shared identifier.
        id: CharsetId,
        /// Name of the specification registered first.
        first: &'static str,
        /// Position of the first claimant in the table.
        first_index: usize,
        /// Name of the specification registered second.
        second: &'static str,
        /// Position of the second claimant in the table.
        second_index: usize,
    },
    /// No specification was registered at all.
    #[error("no charsets are registered")]
    Empty,
}

/// A charset lookup that produced no specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No registered specification has this identifier.
    #[error("unknown charset identifier {0}")]
    NotFound(CharsetId),
    /// No registered specification has this name or alias.
    #[error("unknown charset: {0}")]
    UnknownName(String),
    /// The process-wide registry failed to initialise.
    #[error("charset registry unavailable: {0}")]
    Unavailable(#[from] RegistryError),
}

/// Error returned by one-shot transcoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    /// The process-wide registry failed to initialise.
    #[error("charset registry unavailable: {0}")]
    Unavailable(#[from] RegistryError),
    /// The source charset could not be resolved.
    #[error("source {0}")]
    UnknownSource(LookupError),
    /// The target charset could not be resolved.
    #[error("target {0}")]
    UnknownTarget(LookupError),
    /// The input is not valid in the source charset.
    #[error("invalid input: {0}")]
    Decode(#[from] DecodeError),
    /// The target charset cannot represent a decoded character.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
