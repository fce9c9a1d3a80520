//! Distance units and arc-length helpers.
//!
//! The canonical base unit is [`Distance::Metre`]. Astronomical units use the IAU values: the astronomical unit is
//! exactly `149 597 870 700 m`, the light-year is a Julian year of light travel.
//!
//! ## Angular distances
//!
//! [`arc_seconds_to_metres`] and [`metres_to_arc_seconds`] relate an angle on the Earth's surface to a length,
//! assuming a spherical Earth where one minute of arc spans one nautical mile (`1852 m`). The factor depends on the
//! latitude, so these sit outside [`Convert`](crate::Convert) and take it explicitly. Degrees are turned into radians
//! with [`rotation::DEGREES_TO_RADIANS`].
//!
//! ```rust
//! use unitconv_core::distance;
//!
//! let m = distance::arc_seconds_to_metres(60.0, 0.0);
//! assert!((m - 1852.0).abs() < 1e-9);
//! ```

use unitconv_derive::Domain;

use crate::rotation;
use crate::Scalar;

/// A nautical mile over sixty: metres per arc-second in the spherical model.
const ARC_FACTOR: Scalar = 1852.0 / 60.0;

/// Units of distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Distance {
    /// `1e-3 m`.
    #[unit(symbol = "mm", aliases = ["mm"], scale = 0.001)]
    Millimetre,
    /// `1e-2 m`.
    #[unit(symbol = "cm", aliases = ["cm"], scale = 0.01)]
    Centimetre,
    /// International inch.
    #[unit(symbol = "in", aliases = ["\"", "in"], scale = 0.0254)]
    Inch,
    /// International foot.
    #[unit(symbol = "ft", aliases = ["f", "'", "ft"], scale = 0.30479999)]
    Foot,
    /// International yard.
    #[unit(symbol = "yd", aliases = ["yards", "yard", "yd"], scale = 0.9144)]
    Yard,
    /// SI metre.
    #[unit(symbol = "m", aliases = ["m"], scale = 1.0)]
    Metre,
    /// `1000 m`.
    #[unit(symbol = "km", aliases = ["km"], scale = 1000.0)]
    Kilometre,
    /// Statute mile.
    #[unit(symbol = "mi", aliases = ["mi"], scale = 1609.344)]
    Mile,
    /// Nautical mile.
    #[unit(symbol = "nmi", aliases = ["nmi"], scale = 1852.0)]
    NauticalMile,
    /// Astronomical unit.
    #[unit(symbol = "au", aliases = ["au"], scale = 149_597_870_700.0)]
    AstronomicalUnit,
    /// Light-year.
    #[unit(
        symbol = "ly",
        aliases = ["ly", "lightyear", "lightyears"],
        scale = 9_460_730_472_580_800.0
    )]
    Lightyear,
    /// Parsec.
    #[unit(
        symbol = "pc",
        aliases = ["pc", "parsec", "parsecs"],
        scale = 30_856_775_810_000_000.0
    )]
    Parsec,
}

/// Length of an arc at `latitude` degrees, in metres.
///
/// `arc_seconds * |cos(latitude) * 1852 / 60|`. Pass `0.0` for the equator.
#[inline]
pub fn arc_seconds_to_metres(arc_seconds: Scalar, latitude: Scalar) -> Scalar {
    arc_seconds * (latitude_cos(latitude) * ARC_FACTOR).abs()
}

/// Angle spanned by `metres` at `latitude` degrees, in arc-seconds.
///
/// `metres * |cos(latitude) / (1852 / 60)|`. Pass `0.0` for the equator.
#[inline]
pub fn metres_to_arc_seconds(metres: Scalar, latitude: Scalar) -> Scalar {
    metres * (latitude_cos(latitude) / ARC_FACTOR).abs()
}

#[inline]
fn latitude_cos(latitude: Scalar) -> Scalar {
    (rotation::DEGREES_TO_RADIANS * latitude).cos()
}
