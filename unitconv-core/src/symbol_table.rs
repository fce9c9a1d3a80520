//! Immutable alias lookup used by every domain.

use std::collections::HashMap;

use crate::registry::DomainKind;

/// Hash table from a free-text alias to a unit identifier of one domain.
///
/// Tables are built once from the domain's ordered alias list and never mutated afterwards. Lookups are exact
/// matches: case-sensitive, no trimming, no normalization. A miss is a normal outcome and yields `None`.
///
/// ```rust
/// use unitconv_core::time::Time;
/// use unitconv_core::{DomainKind, SymbolTable};
///
/// let table = SymbolTable::from_pairs(
///     DomainKind::Time,
///     &[("s", Time::Second), ("sec", Time::Second), ("h", Time::Hour)],
/// );
/// assert_eq!(table.get("sec"), Some(Time::Second));
/// assert_eq!(table.get("H"), None);
/// assert_eq!(table.kind(), DomainKind::Time);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable<U> {
    kind: DomainKind,
    entries: HashMap<&'static str, U>,
}

impl<U: Copy> SymbolTable<U> {
    /// Builds a table from `(alias, unit)` pairs.
    ///
    /// Aliases are expected to be unique; the `Domain` derive enforces this at compile time. Should a hand-built
    /// list repeat an alias, the last pair wins.
    pub fn from_pairs(kind: DomainKind, pairs: &[(&'static str, U)]) -> Self {
        let entries: HashMap<&'static str, U> = pairs.iter().copied().collect();
        log::trace!("built {} symbol table with {} aliases", kind, entries.len());
        Self { kind, entries }
    }

    /// Resolves `symbol` to a unit, or `None` when no alias matches.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<U> {
        self.entries.get(symbol).copied()
    }

    /// Whether `symbol` is a known alias.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Domain this table belongs to.
    #[inline]
    pub fn kind(&self) -> DomainKind {
        self.kind
    }

    /// Number of aliases.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no aliases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(alias, unit)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, U)> + '_ {
        self.entries.iter().map(|(alias, unit)| (*alias, *unit))
    }
}
