//! Time units.
//!
//! The canonical base unit is [`Time::Second`]. A day is the civil `86 400 s`; leap seconds are ignored.

use unitconv_derive::Domain;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Time {
    /// `1e-9 s`.
    #[unit(
        symbol = "ns",
        aliases = ["nanosecond", "nanoseconds", "ns"],
        scale = 0.000000001
    )]
    Nanosecond,
    /// `1e-6 s`.
    #[unit(
        symbol = "µs",
        aliases = ["microsecond", "microseconds", "µs"],
        scale = 0.000001
    )]
    Microsecond,
    /// `1e-3 s`.
    #[unit(
        symbol = "ms",
        aliases = ["millisecond", "milliseconds", "ms"],
        scale = 0.001
    )]
    Millisecond,
    /// SI second.
    #[unit(symbol = "s", aliases = ["s", "sec", "seconds", "secs"], scale = 1.0)]
    Second,
    /// `60 s`.
    #[unit(symbol = "m", aliases = ["m", "min", "minute", "minutes"], scale = 60.0)]
    Minute,
    /// `3600 s`.
    #[unit(symbol = "h", aliases = ["h", "hour", "hours", "hr"], scale = 3600.0)]
    Hour,
    /// `86 400 s`.
    #[unit(symbol = "d", aliases = ["d", "day", "days"], scale = 86400.0)]
    Day,
}
