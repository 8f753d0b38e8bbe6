//! Identifier interning.
//!
//! Label names, qualifiers, function names, and language tags are
//! deduplicated into a `NameTable`; comparing two [`Name`] handles is
//! an O(1) integer comparison. Free-form payload text (doc strings,
//! cache directives, type terms) is not interned.

use indexmap::IndexSet;

/// A lightweight handle to an interned identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Name(u32);

impl Name {
    /// Raw index for debugging and serial dumps.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a Name from a raw index. Use only for rebuilding handles.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Interner for identifiers. Insertion order is stable, so handles are
/// reproducible across identical build sequences.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: IndexSet<String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an identifier, returning its handle. Re-interning an
    /// already-known string returns the existing handle.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(index) = self.names.get_index_of(s) {
            return Name(index as u32);
        }
        let (index, _) = self.names.insert_full(s.to_owned());
        Name(index as u32)
    }

    /// Resolve a handle back to its string.
    ///
    /// # Panics
    /// Panics if the handle was not created by this table.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.names
            .get_index(name.0 as usize)
            .expect("Name not created by this table")
    }

    /// Resolve a handle, returning None for foreign handles.
    #[inline]
    pub fn try_resolve(&self, name: Name) -> Option<&str> {
        self.names.get_index(name.0 as usize).map(|s| s.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all interned identifiers with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (Name(i as u32), s.as_str()))
    }
}
