//! Speed units.
//!
//! The canonical base unit is [`Speed::MetreSecond`] (`scale == 1.0`). Mach is fixed at sea-level conditions
//! (`340.29 m/s`).
//!
//! ```rust
//! use unitconv_core::speed::Speed;
//! use unitconv_core::Convert;
//!
//! let mps = Speed::convert(100.0, Speed::KilometreHour, Speed::MetreSecond);
//! assert!((mps - 27.77778).abs() < 1e-9);
//! ```

use unitconv_derive::Domain;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Speed {
    /// Kilometres per hour.
    #[unit(symbol = "km/h", aliases = ["k/h", "km/h", "kph"], scale = 0.2777778)]
    KilometreHour,
    /// Feet per second.
    #[unit(symbol = "f/s", aliases = ["f/s", "fps"], scale = 0.3048)]
    FeetSecond,
    /// Statute miles per hour.
    #[unit(symbol = "mph", aliases = ["mi/h", "mph"], scale = 0.44704)]
    MileHour,
    /// Nautical miles per hour.
    #[unit(
        symbol = "kn",
        aliases = ["kn", "kt", "knot", "knots", "nmi/h", "nmiph"],
        scale = 0.514444
    )]
    Knot,
    /// Metres per second.
    #[unit(symbol = "m/s", aliases = ["m/s", "mps"], scale = 1.0)]
    MetreSecond,
    /// Speed of sound at sea level.
    #[unit(symbol = "mach", aliases = ["mach"], scale = 340.29)]
    Mach,
    /// Speed of light in vacuum.
    #[unit(symbol = "c", aliases = ["c"], scale = 299_792_458.0)]
    Lightspeed,
}
