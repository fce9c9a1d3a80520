//! Core types for multi-domain unit resolution and conversion.
//!
//! `unitconv-core` provides a small runtime units model:
//!
//! - A *domain* is a closed enum of units for one physical quantity (speed, distance, temperature, …) implementing
//!   [`Domain`].
//! - Free text resolves to a unit through the domain's alias table, [`Domain::try_guess_unit`].
//! - Values convert with [`Convert::convert`]; multiplicative domains share one rule ([`rules::ratio`]),
//!   temperature brings its own affine rule.
//!
//! Most users should depend on `unitconv` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Turning user-typed symbols (`"mph"`, `"°F"`, `"cu ft"`) into unit identifiers, per domain.
//! - Fast conversion between units of the same domain.
//! - Keeping domains apart: the same token can mean different units in different domains, and identifiers of one
//!   domain never convert into another.
//!
//! # What this crate does not try to solve
//!
//! - Certified accuracy. Values are `f64` and the scale tables are rounded engineering constants; do not use this
//!   where traceable precision is required.
//! - Unit algebra (`m/s * s`) or compile-time dimension checking.
//! - Fuzzy or case-insensitive symbol matching.
//!
//! # Quick start
//!
//! ```rust
//! use unitconv_core::distance::Distance;
//! use unitconv_core::{Convert, Domain};
//!
//! let from = Distance::try_guess_unit("mi").unwrap();
//! let metres = Distance::convert(1.0, from, Distance::Metre);
//! assert!((metres - 1609.344).abs() < 1e-9);
//! assert_eq!(Distance::Metre.symbol(), "m");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: serializes unit enums as their canonical symbol (any alias deserializes), [`DomainKind`] as its
//!   lower-case name, [`AnyUnit`] as `{ "domain": .., "unit": .. }` and [`Quantity`] as `{ "value": .., "unit": .. }`.
//!
//! # Panics and errors
//!
//! Lookups return `Option` and conversions are total over the closed unit sets; neither panics. Temperatures below
//! absolute zero are clamped silently. [`ConversionError`] is only returned by the strict entry points: `FromStr`,
//! `TryFrom<u8>` and the [`registry`] helpers.
//!
//! # Thread safety
//!
//! Symbol tables are built lazily on first use, once per process, and are read-only afterwards. Every operation is
//! a pure function and may be called from any number of threads.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod domain;
mod error;
mod macros;
mod quantity;
mod symbol_table;

pub mod registry;
pub mod rules;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use domain::{Convert, Domain, RatioDomain, Scalar};
pub use error::ConversionError;
pub use quantity::Quantity;
pub use registry::{AnyUnit, DomainKind};
pub use symbol_table::SymbolTable;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined domains
// ─────────────────────────────────────────────────────────────────────────────

pub mod domains;

pub use domains::area;
pub use domains::distance;
pub use domains::mass;
pub use domains::pressure;
pub use domains::rotation;
pub use domains::speed;
pub use domains::temperature;
pub use domains::time;
pub use domains::volume;

pub use domains::area::Area;
pub use domains::distance::Distance;
pub use domains::mass::Mass;
pub use domains::pressure::Pressure;
pub use domains::rotation::Rotation;
pub use domains::speed::Speed;
pub use domains::temperature::Temperature;
pub use domains::time::Time;
pub use domains::volume::Volume;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn check_descriptor<D: Convert + TryFrom<u8>>() {
        // Closed set: every unit round-trips through its ordinal.
        for (i, &unit) in D::ALL.iter().enumerate() {
            assert_eq!(usize::from(unit.index()), i);
            assert_eq!(D::try_from(unit.index()).ok(), Some(unit));
        }
        assert!(D::try_from(u8::try_from(D::ALL.len()).unwrap()).is_err());

        // Canonical symbols resolve back to their unit.
        for &unit in D::ALL {
            assert_eq!(D::try_guess_unit(unit.symbol()), Some(unit), "{:?}", unit);
            assert_eq!(unit.to_string(), unit.symbol());
        }

        // Every alias is in the table and nothing else is.
        let table = D::symbol_table();
        assert_eq!(table.len(), D::ALIASES.len());
        assert_eq!(table.kind(), D::KIND);
        for &(alias, unit) in D::ALIASES {
            assert_eq!(table.get(alias), Some(unit));
        }
        assert_eq!(D::try_guess_unit("not-a-real-unit"), None);
    }

    fn check_ratio_scales<D: RatioDomain>() {
        for &unit in D::ALL {
            let scale = unit.scale();
            assert!(scale.is_finite() && scale > 0.0, "{:?}", unit);
        }
    }

    #[test]
    fn descriptors_are_consistent() {
        check_descriptor::<Speed>();
        check_descriptor::<Distance>();
        check_descriptor::<Rotation>();
        check_descriptor::<Time>();
        check_descriptor::<Temperature>();
        check_descriptor::<Pressure>();
        check_descriptor::<Mass>();
        check_descriptor::<Area>();
        check_descriptor::<Volume>();
    }

    #[test]
    fn scales_are_positive() {
        check_ratio_scales::<Speed>();
        check_ratio_scales::<Distance>();
        check_ratio_scales::<Rotation>();
        check_ratio_scales::<Time>();
        check_ratio_scales::<Pressure>();
        check_ratio_scales::<Mass>();
        check_ratio_scales::<Area>();
        check_ratio_scales::<Volume>();
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("kph".parse::<Speed>().unwrap(), Speed::KilometreHour);
        assert_eq!(
            "KPH".parse::<Speed>().unwrap_err(),
            ConversionError::UnresolvedSymbol {
                domain: DomainKind::Speed,
                symbol: "KPH".into(),
            }
        );
    }

    #[test]
    fn try_from_out_of_range() {
        assert_eq!(
            Temperature::try_from(3u8).unwrap_err(),
            ConversionError::InvalidUnitIndex {
                domain: DomainKind::Temperature,
                index: 3,
            }
        );
    }

    fn identity_holds<D: Convert>(v: f64) -> bool {
        D::ALL
            .iter()
            .all(|&u| D::convert(v, u, u).to_bits() == v.to_bits())
    }

    proptest! {
        #[test]
        fn prop_identity_every_domain(v in -1e300..1e300f64) {
            prop_assert!(identity_holds::<Speed>(v));
            prop_assert!(identity_holds::<Distance>(v));
            prop_assert!(identity_holds::<Rotation>(v));
            prop_assert!(identity_holds::<Time>(v));
            prop_assert!(identity_holds::<Temperature>(v));
            prop_assert!(identity_holds::<Pressure>(v));
            prop_assert!(identity_holds::<Mass>(v));
            prop_assert!(identity_holds::<Area>(v));
            prop_assert!(identity_holds::<Volume>(v));
        }
    }
}
