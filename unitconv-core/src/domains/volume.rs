//! Volume units.
//!
//! The canonical base unit is [`Volume::CubicMetre`]. Customary liquid measures (cup, pint, quart, gallon) are the
//! US definitions; the barrel is the 42-gallon oil barrel.
//!
//! `"in3"` names the cubic inch only. Several spellings exist for cubic feet (`"ft3"`, `"cu ft"`, `"f³"`, …) but none
//! of them overlap with inches.

use unitconv_derive::Domain;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Volume {
    /// Millilitre.
    #[unit(
        symbol = "ml",
        aliases = ["milliliter", "millilitre", "ml"],
        scale = 0.000001
    )]
    Millilitre,
    /// Centilitre.
    #[unit(
        symbol = "cl",
        aliases = ["centiliter", "centilitre", "cl"],
        scale = 0.00001
    )]
    Centilitre,
    /// Cubic inch.
    #[unit(
        symbol = "in3",
        aliases = [
            "\"3", "\"^3", "\"³", "cu in", "cu. in", "cu. in.", "in. cu", "in. cu.",
            "in3", "in^3", "in³",
        ],
        scale = 0.000016387064
    )]
    CubicInch,
    /// US fluid ounce.
    #[unit(
        symbol = "fl. oz",
        aliases = [
            "fl oz", "fl ℥", "fl. oz", "fl/oz", "floz", "f℥", "oz. fl", "oz. fl.", "ƒ ℥", "℥",
        ],
        scale = 0.000029574
    )]
    FluidOunce,
    /// US cup.
    #[unit(symbol = "cup", aliases = ["cup", "cups"], scale = 0.000237)]
    Cup,
    /// US liquid pint.
    #[unit(symbol = "pt", aliases = ["p", "pint", "pt"], scale = 0.000473176473)]
    Pint,
    /// US liquid quart.
    #[unit(symbol = "qt", aliases = ["qt", "quart"], scale = 0.000946)]
    Quart,
    /// Litre.
    #[unit(symbol = "l", aliases = ["l", "liter", "litre"], scale = 0.001)]
    Litre,
    /// US liquid gallon.
    #[unit(symbol = "gal", aliases = ["gal", "gallon"], scale = 0.003785411784)]
    Gallon,
    /// Cubic foot.
    #[unit(
        symbol = "ft3",
        aliases = [
            "'3", "'^3", "'³", "cu f", "cu ft", "cu. f", "cu. f.", "cu. ft", "cu. ft.",
            "f. cu", "f. cu.", "f^3", "ft. cu", "ft. cu.", "ft3", "ft^3", "ft³", "f³",
        ],
        scale = 0.028316846592
    )]
    CubicFoot,
    /// Oil barrel.
    #[unit(symbol = "bbl", aliases = ["barrel", "barrels", "bbl"], scale = 0.158987294928)]
    Barrel,
    /// Cubic yard.
    #[unit(symbol = "yd3", aliases = ["yd3", "yd^3", "yd³"], scale = 0.764554858)]
    CubicYard,
    /// Cubic metre.
    #[unit(symbol = "m3", aliases = ["m3", "m^3", "m³"], scale = 1.0)]
    CubicMetre,
}
