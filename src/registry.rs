//! Charset registry and lookup.
//!
//! A [`Registry`] owns a fixed, ordered set of charset specifications and
//! resolves a [`CharsetId`] to the one that handles it. It has no mutation
//! API: once built, every lookup sees the same set.
//!
//! The process-wide registry is built on first use from the compiled-in
//! [`BUILTIN`](crate::builtin::BUILTIN) table followed by any plug-ins
//! submitted with [`register_charset!`](crate::register_charset).
//!
//! # Example
//!
//! ```
//! use charspec::{CharsetId, LookupError, registry};
//!
//! // List available charsets
//! for (id, name) in registry::list().unwrap() {
//!     println!("{id}: {name}");
//! }
//!
//! let latin1 = registry::find(CharsetId::ISO_8859_1).unwrap();
//! assert_eq!(latin1.decode_to_vec(b"caf\xE9"), Ok(vec!['c', 'a', 'f', 'é']));
//!
//! assert_eq!(
//!     registry::find(CharsetId::UNSPECIFIED).unwrap_err(),
//!     LookupError::NotFound(CharsetId::UNSPECIFIED),
//! );
//!
//! let utf8 = registry::transcode(b"caf\xE9", CharsetId::ISO_8859_1, CharsetId::UTF_8).unwrap();
//! assert_eq!(utf8, "café".as_bytes());
//! ```

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::builtin::BUILTIN;
use crate::charset::CharsetSpec;
use crate::error::{LookupError, RegistryError, TranscodeError};
use crate::id::CharsetId;

/// A charset contributed from outside the built-in table.
///
/// Submitted at link time via [`register_charset!`](crate::register_charset).
pub struct Registration(&'static dyn CharsetSpec);

impl Registration {
    /// Wraps a specification for submission.
    pub const fn new(spec: &'static dyn CharsetSpec) -> Self {
        Self(spec)
    }

    /// Returns the submitted specification.
    pub fn spec(&self) -> &'static dyn CharsetSpec {
        self.0
    }
}

inventory::collect!(Registration);

/// An immutable set of charset specifications with distinct identifiers.
pub struct Registry {
    specs: Vec<&'static dyn CharsetSpec>,
    index: FxHashMap<CharsetId, usize>,
}

impl Registry {
    /// Builds a registry from an ordered list of specifications.
    ///
    /// The list order is the enumeration order. Fails if two specifications
    /// share an identifier or if the list is empty.
    pub fn new<I>(specs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'static dyn CharsetSpec>,
    {
        let specs: Vec<_> = specs.into_iter().collect();
        if specs.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = FxHashMap::with_capacity_and_hasher(specs.len(), Default::default());
        for (pos, spec) in specs.iter().enumerate() {
            if let Some(&first_pos) = index.get(&spec.id()) {
                let first: &dyn CharsetSpec = specs[first_pos];
                return Err(RegistryError::DuplicateIdentifier {
                    id: spec.id(),
                    first: first.name(),
                    first_index: first_pos,
                    second: spec.name(),
                    second_index: pos,
                });
            }
            index.insert(spec.id(), pos);
        }

        Ok(Self { specs, index })
    }

    /// Returns the specification registered under `id`.
    ///
    /// Identifiers that no specification claims, including negative values
    /// and [`CharsetId::UNSPECIFIED`], yield [`LookupError::NotFound`]. There
    /// is no fallback charset.
    pub fn find(&self, id: CharsetId) -> Result<&'static dyn CharsetSpec, LookupError> {
        self.get(id).ok_or_else(|| {
            tracing::trace!(%id, "charset lookup miss");
            LookupError::NotFound(id)
        })
    }

    /// Returns the specification registered under `id`, if any.
    pub fn get(&self, id: CharsetId) -> Option<&'static dyn CharsetSpec> {
        self.index.get(&id).map(|&pos| self.specs[pos])
    }

    /// Returns `true` if a specification is registered under `id`.
    pub fn contains(&self, id: CharsetId) -> bool {
        self.index.contains_key(&id)
    }

    /// Finds a specification by canonical name or alias (case-insensitive).
    ///
    /// When several specifications answer to the same name, the first in
    /// registry order wins.
    pub fn find_by_name(&self, name: &str) -> Result<&'static dyn CharsetSpec, LookupError> {
        self.specs
            .iter()
            .copied()
            .find(|spec| spec.matches(name))
            .ok_or_else(|| LookupError::UnknownName(name.to_string()))
    }

    /// Returns `(identifier, name)` for every specification, in registry
    /// order.
    ///
    /// The order is stable for the lifetime of the registry but is not a
    /// public guarantee across versions.
    pub fn list(&self) -> impl ExactSizeIterator<Item = (CharsetId, &'static str)> {
        self.specs.iter().map(|spec| (spec.id(), spec.name()))
    }

    /// Returns every specification, in registry order.
    pub fn specs(&self) -> impl ExactSizeIterator<Item = &'static dyn CharsetSpec> {
        self.specs.iter().copied()
    }

    /// Returns the number of specifications.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if the registry holds no specifications.
    ///
    /// Always `false` for a registry built by [`Registry::new`].
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Transcodes `input` from one registered charset to another.
    ///
    /// # Arguments
    ///
    /// * `input` - The input bytes in the source charset
    /// * `from` - The identifier of the source charset
    /// * `to` - The identifier of the target charset
    ///
    /// # Returns
    ///
    /// The transcoded bytes, or the first lookup, decode or encode error
    /// unchanged.
    pub fn transcode(
        &self,
        input: &[u8],
        from: CharsetId,
        to: CharsetId,
    ) -> Result<Vec<u8>, TranscodeError> {
        let from = self.find(from).map_err(TranscodeError::UnknownSource)?;
        let to = self.find(to).map_err(TranscodeError::UnknownTarget)?;
        transcode_with(input, from, to)
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.list()).finish()
    }
}

fn transcode_with(
    input: &[u8],
    from: &dyn CharsetSpec,
    to: &dyn CharsetSpec,
) -> Result<Vec<u8>, TranscodeError> {
    let chars = from.decode_to_vec(input)?;
    Ok(to.encode(chars)?)
}

static GLOBAL: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

/// Returns the process-wide registry, building it on first use.
///
/// Concurrent first calls build it exactly once. A construction failure is
/// cached and returned to every caller.
pub fn global() -> Result<&'static Registry, RegistryError> {
    GLOBAL
        .get_or_init(|| {
            let plugins = inventory::iter::<Registration>
                .into_iter()
                .map(Registration::spec);
            let result = Registry::new(BUILTIN.iter().copied().chain(plugins));
            match &result {
                Ok(registry) => {
                    tracing::debug!(count = registry.len(), "charset registry initialised");
                }
                Err(error) => {
                    tracing::error!(%error, "charset registry failed to initialise");
                }
            }
            result
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Finds the specification registered under `id` in the process-wide
/// registry.
///
/// Distinguishes an unknown identifier ([`LookupError::NotFound`]) from a
/// registry that failed to initialise ([`LookupError::Unavailable`]).
pub fn find(id: CharsetId) -> Result<&'static dyn CharsetSpec, LookupError> {
    global()?.find(id)
}

/// Finds a specification by name or alias in the process-wide registry.
pub fn find_by_name(name: &str) -> Result<&'static dyn CharsetSpec, LookupError> {
    global()?.find_by_name(name)
}

/// Returns `(identifier, name)` for every charset in the process-wide
/// registry.
pub fn list() -> Result<impl ExactSizeIterator<Item = (CharsetId, &'static str)>, RegistryError>
{
    Ok(global()?.list())
}

/// Returns every specification in the process-wide registry.
pub fn specs() -> Result<impl ExactSizeIterator<Item = &'static dyn CharsetSpec>, RegistryError>
{
    Ok(global()?.specs())
}

/// Transcodes bytes between two charsets of the process-wide registry.
pub fn transcode(input: &[u8], from: CharsetId, to: CharsetId) -> Result<Vec<u8>, TranscodeError> {
    global()?.transcode(input, from, to)
}
