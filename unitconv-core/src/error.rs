//! Error type shared by the strict (`Result`-returning) entry points.
//!
//! The lookup and conversion primitives themselves are infallible: [`Domain::try_guess_unit`](crate::Domain)
//! answers `None` for an unknown symbol, and [`Convert::convert`](crate::Convert) is total over the closed unit set.
//! Errors only appear at the edges where free text, raw ordinals or runtime-selected domains enter the crate.

use crate::registry::DomainKind;

/// Failures raised while resolving or converting units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No alias of `domain` matches `symbol` exactly.
    #[error("unresolved {domain} symbol `{symbol}`")]
    UnresolvedSymbol {
        /// Domain that was searched.
        domain: DomainKind,
        /// The text that failed to resolve.
        symbol: String,
    },

    /// The two units belong to different domains.
    #[error("cannot convert {from} into {to}")]
    IncompatibleDomains {
        /// Domain of the source unit.
        from: DomainKind,
        /// Domain of the destination unit.
        to: DomainKind,
    },

    /// A raw ordinal does not name a unit of `domain`.
    #[error("{index} is not a valid {domain} unit index")]
    InvalidUnitIndex {
        /// Domain the ordinal was decoded for.
        domain: DomainKind,
        /// The offending ordinal.
        index: u8,
    },

    /// The text does not name any domain.
    #[error("unknown domain `{0}`")]
    UnknownDomain(String),

    /// The numeric part of a quantity could not be parsed.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}
