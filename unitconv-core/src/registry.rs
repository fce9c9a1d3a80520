//! Runtime dispatch over the predefined domains.
//!
//! The unit enums are the primary API when the domain is known at compile time. This module serves callers that
//! learn the domain at runtime (from configuration, user input, …). Identifier spaces stay separate: an
//! [`AnyUnit`] carries its domain, and converting across domains is an error rather than a reinterpretation of
//! ordinals.
//!
//! ```rust
//! use unitconv_core::registry::{self, DomainKind};
//!
//! let from = registry::try_guess_unit(DomainKind::Distance, "mi").unwrap();
//! let to = registry::try_guess_unit(DomainKind::Distance, "m").unwrap();
//! let metres = registry::convert_value(1.0, from, to).unwrap();
//! assert!((metres - 1609.344).abs() < 1e-9);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::domains::{
    area::Area, distance::Distance, mass::Mass, pressure::Pressure, rotation::Rotation, speed::Speed,
    temperature::Temperature, time::Time, volume::Volume,
};
use crate::error::ConversionError;
use crate::macros::impl_any_unit;
use crate::{Convert, Domain, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The physical quantity a unit measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum DomainKind {
    /// See [`Speed`].
    Speed,
    /// See [`Distance`].
    Distance,
    /// See [`Rotation`].
    Rotation,
    /// See [`Time`].
    Time,
    /// See [`Temperature`].
    Temperature,
    /// See [`Pressure`].
    Pressure,
    /// See [`Mass`].
    Mass,
    /// See [`Area`].
    Area,
    /// See [`Volume`].
    Volume,
}

impl DomainKind {
    /// Every domain, in declaration order.
    pub const ALL: [DomainKind; 9] = [
        DomainKind::Speed,
        DomainKind::Distance,
        DomainKind::Rotation,
        DomainKind::Time,
        DomainKind::Temperature,
        DomainKind::Pressure,
        DomainKind::Mass,
        DomainKind::Area,
        DomainKind::Volume,
    ];

    /// Lower-case name, as used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            DomainKind::Speed => "speed",
            DomainKind::Distance => "distance",
            DomainKind::Rotation => "rotation",
            DomainKind::Time => "time",
            DomainKind::Temperature => "temperature",
            DomainKind::Pressure => "pressure",
            DomainKind::Mass => "mass",
            DomainKind::Area => "area",
            DomainKind::Volume => "volume",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DomainKind {
    type Err = ConversionError;

    /// Domain names are matched ignoring ASCII case; unit symbols never are.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownDomain(s.to_owned()))
    }
}

/// A unit of any predefined domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "domain", content = "unit", rename_all = "lowercase")
)]
pub enum AnyUnit {
    /// A speed unit.
    Speed(Speed),
    /// A distance unit.
    Distance(Distance),
    /// A rotation unit.
    Rotation(Rotation),
    /// A time unit.
    Time(Time),
    /// A temperature unit.
    Temperature(Temperature),
    /// A pressure unit.
    Pressure(Pressure),
    /// A mass unit.
    Mass(Mass),
    /// An area unit.
    Area(Area),
    /// A volume unit.
    Volume(Volume),
}

impl_any_unit!(Speed, Distance, Rotation, Time, Temperature, Pressure, Mass, Area, Volume);

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Resolves `symbol` within `domain` only.
///
/// The same text can mean different units in different domains (`"c"` is lightspeed for speed, Celsius for
/// temperature); there is no global namespace.
pub fn try_guess_unit(domain: DomainKind, symbol: &str) -> Option<AnyUnit> {
    let unit = guess_in(domain, symbol);
    if unit.is_none() {
        log::debug!("no {} unit matches {:?}", domain, symbol);
    }
    unit
}

/// Canonical symbol of `unit`.
#[inline]
pub fn symbol(unit: AnyUnit) -> &'static str {
    unit.symbol()
}

/// Whether `a` and `b` belong to the same domain.
#[inline]
pub fn compatible(a: AnyUnit, b: AnyUnit) -> bool {
    a.domain() == b.domain()
}

/// Every unit of `domain`, in declaration order.
pub fn units(domain: DomainKind) -> Vec<AnyUnit> {
    units_of(domain)
}

/// Converts `value` between two units of the same domain.
///
/// # Errors
///
/// [`ConversionError::IncompatibleDomains`] when `from` and `to` belong to different domains.
pub fn convert_value(value: Scalar, from: AnyUnit, to: AnyUnit) -> Result<Scalar, ConversionError> {
    convert_within(value, from, to).ok_or_else(|| {
        log::debug!("refusing to convert {} ({}) into {} ({})", from, from.domain(), to, to.domain());
        ConversionError::IncompatibleDomains {
            from: from.domain(),
            to: to.domain(),
        }
    })
}

/// Resolves both symbols in `domain` and converts `value` between them.
///
/// # Errors
///
/// [`ConversionError::UnresolvedSymbol`] naming the first symbol that does not resolve.
///
/// ```rust
/// use unitconv_core::registry::{self, DomainKind};
///
/// let kelvin = registry::convert_symbols(DomainKind::Temperature, 32.0, "°F", "K").unwrap();
/// assert!((kelvin - 273.15).abs() < 1e-9);
/// assert!(registry::convert_symbols(DomainKind::Temperature, 1.0, "C", "rankine").is_err());
/// ```
pub fn convert_symbols(
    domain: DomainKind,
    value: Scalar,
    from: &str,
    to: &str,
) -> Result<Scalar, ConversionError> {
    let resolve = |symbol: &str| {
        try_guess_unit(domain, symbol).ok_or_else(|| ConversionError::UnresolvedSymbol {
            domain,
            symbol: symbol.to_owned(),
        })
    };
    let from = resolve(from)?;
    let to = resolve(to)?;
    convert_value(value, from, to)
}
