//! Per-session symbol tables.
//!
//! Two append-only, insertion-ordered registries:
//! - [`IdentifierTable`]: deduplicated by spelling; ids follow first-sighting order
//! - [`StringTable`]: one entry per string literal scanned, duplicates included
//!
//! Each analysis session owns one [`SymbolTables`] and lends it to the
//! scanner, so independent sessions never share state.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::Keyword;

/// Identifier table id (0-based, first-sighting order).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct IdentId(u32);

impl IdentId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        IdentId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for IdentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentId({})", self.0)
    }
}

/// String table index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct StrId(u32);

impl StrId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        StrId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrId({})", self.0)
    }
}

/// Convert a table length into the next id.
///
/// Tables are indexed by `u32`; a toy program never gets near that bound.
#[inline]
fn next_raw(len: usize) -> u32 {
    debug_assert!(u32::try_from(len).is_ok(), "symbol table overflowed u32");
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// One identifier table entry.
///
/// The scanner only creates entries and reads their id. `declared`,
/// `assigned`, `declared_type` and `value` belong to a semantic pass and
/// start out empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    name: String,
    id: IdentId,
    declared: bool,
    assigned: bool,
    declared_type: Option<Keyword>,
    value: i64,
}

impl Identifier {
    fn new(name: &str, id: IdentId) -> Self {
        Identifier {
            name: name.to_owned(),
            id,
            declared: false,
            assigned: false,
            declared_type: None,
            value: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> IdentId {
        self.id
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }

    pub fn declared_type(&self) -> Option<Keyword> {
        self.declared_type
    }

    /// Mark as declared with the given type keyword.
    pub fn declare(&mut self, ty: Keyword) {
        self.declared = true;
        self.declared_type = Some(ty);
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Record an assigned value.
    pub fn assign(&mut self, value: i64) {
        self.assigned = true;
        self.value = value;
    }
}

/// Identifier registry, deduplicated by spelling.
#[derive(Clone, Debug, Default)]
pub struct IdentifierTable {
    entries: Vec<Identifier>,
    by_name: FxHashMap<String, IdentId>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, creating an entry on first sighting.
    pub fn intern(&mut self, name: &str) -> IdentId {
        if let Some(id) = self.lookup(name) {
            return id;
        }
        let id = IdentId::new(next_raw(self.entries.len()));
        self.entries.push(Identifier::new(name, id));
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Id for an already-seen spelling.
    pub fn lookup(&self, name: &str) -> Option<IdentId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: IdentId) -> Option<&Identifier> {
        self.entries.get(id.index())
    }

    pub fn get_mut(&mut self, id: IdentId) -> Option<&mut Identifier> {
        self.entries.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.iter()
    }
}

/// String-literal registry. Every literal gets its own entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Vec<String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and return its index.
    pub fn intern(&mut self, text: impl Into<String>) -> StrId {
        let id = StrId::new(next_raw(self.entries.len()));
        self.entries.push(text.into());
        id
    }

    pub fn get(&self, id: StrId) -> Option<&str> {
        self.entries.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// The tables owned by one analysis session.
#[derive(Clone, Debug, Default)]
pub struct SymbolTables {
    pub identifiers: IdentifierTable,
    pub strings: StringTable,
}

impl SymbolTables {
    pub fn new() -> Self {
        Self::default()
    }
}
