//! Quantity type and its implementations.

use core::fmt;
use core::str::FromStr;

use crate::domain::{Convert, Scalar};
use crate::error::ConversionError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value tagged with a unit of domain `D`.
///
/// The unit is a runtime value, so a single `Quantity<Speed>` can hold km/h or knots. Conversion keeps the domain
/// and only changes the unit.
///
/// # Examples
///
/// ```rust
/// use unitconv_core::speed::Speed;
/// use unitconv_core::Quantity;
///
/// let q = Quantity::new(100.0, Speed::KilometreHour);
/// let v = q.to(Speed::MetreSecond);
/// assert!((v.value() - 27.77778).abs() < 1e-9);
/// assert_eq!(v.unit(), Speed::MetreSecond);
/// ```
///
/// Parsing takes a number, whitespace, then any alias of the domain:
///
/// ```rust
/// use unitconv_core::volume::Volume;
/// use unitconv_core::Quantity;
///
/// let q: Quantity<Volume> = "2.5 fl oz".parse().unwrap();
/// assert_eq!(q.unit(), Volume::FluidOunce);
/// assert_eq!(q.to_string(), "2.5 fl. oz");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<D: Convert> {
    value: Scalar,
    unit: D,
}

impl<D: Convert> Quantity<D> {
    /// Creates a new quantity.
    #[inline]
    pub const fn new(value: Scalar, unit: D) -> Self {
        Self { value, unit }
    }

    /// Returns the raw numeric value, expressed in [`Self::unit`].
    #[inline]
    pub const fn value(self) -> Scalar {
        self.value
    }

    /// Returns the unit.
    #[inline]
    pub const fn unit(self) -> D {
        self.unit
    }

    /// Converts this quantity into `unit`.
    ///
    /// Converting to the current unit returns an identical quantity.
    #[inline]
    pub fn to(self, unit: D) -> Self {
        Self::new(D::convert(self.value, self.unit, unit), unit)
    }

    /// Numeric value this quantity would have in `unit`.
    #[inline]
    pub fn value_in(self, unit: D) -> Scalar {
        D::convert(self.value, self.unit, unit)
    }
}

impl<D: Convert> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

impl<D: Convert> FromStr for Quantity<D> {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, symbol) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let value: Scalar = number
            .parse()
            .map_err(|_| ConversionError::InvalidNumber(number.to_owned()))?;
        let symbol = symbol.trim_start();
        let unit = D::try_guess_unit(symbol).ok_or_else(|| ConversionError::UnresolvedSymbol {
            domain: D::KIND,
            symbol: symbol.to_owned(),
        })?;
        Ok(Self::new(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Distance;
    use crate::registry::DomainKind;
    use crate::temperature::Temperature;
    use crate::time::Time;
    use approx::assert_relative_eq;

    #[test]
    fn to_changes_only_the_unit() {
        let q = Quantity::new(90.0, Time::Minute).to(Time::Hour);
        assert_relative_eq!(q.value(), 1.5, max_relative = 1e-12);
        assert_eq!(q.unit(), Time::Hour);
    }

    #[test]
    fn to_same_unit_is_identity() {
        let q = Quantity::new(-40.0, Temperature::Celsius);
        assert_eq!(q.to(Temperature::Celsius), q);
    }

    #[test]
    fn value_in_matches_to() {
        let q = Quantity::new(3.0, Distance::Yard);
        assert_eq!(q.value_in(Distance::Foot), q.to(Distance::Foot).value());
    }

    #[test]
    fn display_uses_canonical_symbol() {
        assert_eq!(Quantity::new(5.0, Distance::Kilometre).to_string(), "5 km");
        assert_eq!(format!("{:.2}", Quantity::new(1.0 / 3.0, Time::Hour)), "0.33 h");
    }

    #[test]
    fn parse_accepts_any_alias() {
        let q: Quantity<Time> = "12 minutes".parse().unwrap();
        assert_eq!(q, Quantity::new(12.0, Time::Minute));
        assert_eq!(q.to_string(), "12 m");
    }

    #[test]
    fn parse_trims_outer_whitespace() {
        let q: Quantity<Distance> = "  7.5   mi ".parse().unwrap();
        assert_eq!(q, Quantity::new(7.5, Distance::Mile));
    }

    #[test]
    fn parse_rejects_bad_number() {
        let err = "ten km".parse::<Quantity<Distance>>().unwrap_err();
        assert_eq!(err, ConversionError::InvalidNumber("ten".into()));
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        let err = "3 furlongs".parse::<Quantity<Distance>>().unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnresolvedSymbol {
                domain: DomainKind::Distance,
                symbol: "furlongs".into(),
            }
        );
    }

    fn parse_every_canonical_symbol<D: Convert>() {
        for &unit in D::ALL {
            let text = format!("1.5 {}", unit.symbol());
            let q: Quantity<D> = text.parse().unwrap();
            assert_eq!(q, Quantity::new(1.5, unit), "{text}");
        }
    }

    #[test]
    fn parse_resolves_through_each_domain_table() {
        parse_every_canonical_symbol::<crate::Speed>();
        parse_every_canonical_symbol::<Distance>();
        parse_every_canonical_symbol::<crate::Rotation>();
        parse_every_canonical_symbol::<Time>();
        parse_every_canonical_symbol::<Temperature>();
        parse_every_canonical_symbol::<crate::Pressure>();
        parse_every_canonical_symbol::<crate::Mass>();
        parse_every_canonical_symbol::<crate::Area>();
        parse_every_canonical_symbol::<crate::Volume>();
    }

    #[test]
    fn parse_uses_the_target_domain_only() {
        let minutes: Quantity<Time> = "5 m".parse().unwrap();
        let metres: Quantity<Distance> = "5 m".parse().unwrap();
        assert_eq!(minutes.unit(), Time::Minute);
        assert_eq!(metres.unit(), Distance::Metre);
        assert_eq!(
            "5 m".parse::<Quantity<Temperature>>().unwrap_err(),
            ConversionError::UnresolvedSymbol {
                domain: DomainKind::Temperature,
                symbol: "m".into(),
            }
        );
    }

    #[test]
    fn parse_requires_a_symbol() {
        let err = "3".parse::<Quantity<Distance>>().unwrap_err();
        assert!(matches!(err, ConversionError::UnresolvedSymbol { .. }));
    }
}
