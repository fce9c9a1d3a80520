//! The contract every quantity domain implements.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::registry::DomainKind;
use crate::symbol_table::SymbolTable;

/// Numeric type used by every conversion.
///
/// This is the widest native floating-point type. Results are approximate and fast; the crate makes no claim of
/// certified or traceable accuracy.
pub type Scalar = f64;

/// A closed set of units for one physical quantity.
///
/// Implementations are generated by `#[derive(Domain)]` on a fieldless enum. Every unit has exactly one canonical
/// symbol and any number of input aliases; the aliases are scoped to the domain, so `"m"` is a metre in
/// [`Distance`](crate::distance::Distance) and a minute in [`Time`](crate::time::Time).
///
/// # Invariants
///
/// - [`Self::ALL`] lists every unit exactly once, in declaration order.
/// - Every unit's canonical symbol also appears in [`Self::ALIASES`].
/// - No alias appears twice within a domain.
pub trait Domain: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Which domain this is, for runtime dispatch.
    const KIND: DomainKind;

    /// Every unit of the domain.
    const ALL: &'static [Self];

    /// Ordered `(alias, unit)` pairs the symbol table is built from.
    const ALIASES: &'static [(&'static str, Self)];

    /// Canonical display symbol of this unit.
    fn symbol(self) -> &'static str;

    /// Zero-based position of this unit in [`Self::ALL`].
    fn index(self) -> u8;

    /// The domain's process-lifetime alias table, built on first use.
    fn symbol_table() -> &'static SymbolTable<Self>;

    /// Resolves a free-text symbol by exact match.
    ///
    /// `None` means "unresolved" and is an expected outcome for free-text input; it is up to the caller to prompt,
    /// default or reject.
    #[inline]
    fn try_guess_unit(symbol: &str) -> Option<Self> {
        Self::symbol_table().get(symbol)
    }
}

/// A domain whose units differ only by a multiplicative factor.
pub trait RatioDomain: Domain {
    /// Magnitude of one of this unit expressed in the domain's base unit. Always strictly positive.
    fn scale(self) -> Scalar;
}

/// Conversion of values between two units of the same domain.
pub trait Convert: Domain {
    /// Converts `value` from `from` into `to`.
    ///
    /// When `from == to` the input is returned unchanged, bit for bit.
    fn convert(value: Scalar, from: Self, to: Self) -> Scalar;
}
