//! Rotation units.
//!
//! The canonical base unit is [`Rotation::Degree`]. This module also owns the degree/radian factors used elsewhere in
//! the crate (the [`distance`](crate::distance) arc helpers read [`DEGREES_TO_RADIANS`] from here), so there is a
//! single definition of the radian.
//!
//! ```rust
//! use unitconv_core::rotation::Rotation;
//! use unitconv_core::Convert;
//!
//! let rad = Rotation::convert(180.0, Rotation::Degree, Rotation::Radian);
//! assert!((rad - core::f64::consts::PI).abs() < 1e-12);
//! ```

use core::f64::consts::PI;

use unitconv_derive::Domain;

use crate::Scalar;

/// Multiply degrees by this to get radians.
pub const DEGREES_TO_RADIANS: Scalar = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RADIANS_TO_DEGREES: Scalar = 180.0 / PI;

/// Units of rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Rotation {
    /// Gradian (1/400 of a turn).
    #[unit(symbol = "grad", aliases = ["grad", "gradians"], scale = 0.9)]
    Gradian,
    /// Degree (1/360 of a turn).
    #[unit(
        symbol = "deg",
        aliases = ["°", "d", "deg", "degree", "degrees"],
        scale = 1.0
    )]
    Degree,
    /// Radian.
    #[unit(symbol = "rad", aliases = ["rad", "radians"], scale = RADIANS_TO_DEGREES)]
    Radian,
    /// One full revolution.
    #[unit(
        symbol = "tr",
        aliases = ["turns", "turn", "cycle", "pla", "rev", "tr"],
        scale = 360.0
    )]
    Turn,
}
