//! Pressure units.
//!
//! The canonical base unit is the standard [`Pressure::Atmosphere`]. Scales are the usual engineering-table values,
//! rounded to nine or ten significant digits. Water and mercury columns assume standard gravity and density.

use unitconv_derive::Domain;

/// Units of pressure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Pressure {
    /// Dyne per square centimetre.
    #[unit(
        symbol = "dyn/cm2",
        aliases = ["dyn/cm²", "dyn/cm^2", "dyn/cm2"],
        scale = 0.000000987
    )]
    DyneSquareCentimetre,
    /// Millitorr.
    #[unit(symbol = "mTorr", aliases = ["mTorr"], scale = 0.000001316)]
    MilliTorr,
    /// Pascal.
    #[unit(
        symbol = "Pa",
        aliases = ["pascals", "pascal", "pa", "Pa", "N/m²", "N/m^2", "N/m2"],
        scale = 0.000009869
    )]
    Pascal,
    /// Millimetre of water.
    #[unit(symbol = "mmH2O", aliases = ["mmH2O"], scale = 0.000096784)]
    MillimetreWater,
    /// Pound-force per square foot.
    #[unit(symbol = "psf", aliases = ["psf"], scale = 0.000472541)]
    PoundSquareFoot,
    /// Hectopascal, identical to the millibar.
    #[unit(
        symbol = "hPa",
        aliases = ["millibars", "millibar", "mbar", "hPa", "hectopascals", "hectopascal"],
        scale = 0.000986923
    )]
    Hectopascal,
    /// Centimetre of water.
    #[unit(symbol = "cmH2O", aliases = ["cmH2O"], scale = 0.000967839)]
    CentimetreWater,
    /// Millimetre of mercury.
    #[unit(symbol = "mmHg", aliases = ["mmHg"], scale = 0.001315789)]
    MillimetreMercury,
    /// Inch of water.
    #[unit(symbol = "inH2O", aliases = ["inH20", "inH2O"], scale = 0.002458319)]
    InchWater,
    /// Ounce-force per square inch.
    #[unit(
        symbol = "oz/in2",
        aliases = ["oz/in²", "oz/in^2", "oz/in2"],
        scale = 0.004252876
    )]
    OunceSquareInch,
    /// Decibel, as listed in the source table.
    #[unit(symbol = "dB", aliases = ["dB", "decibel", "decibels"], scale = 0.005154639)]
    Decibel,
    /// Kilopascal.
    #[unit(
        symbol = "kPa",
        aliases = ["kpa", "kPa", "kilopascals", "kilopascal"],
        scale = 0.009869233
    )]
    Kilopascal,
    /// Centimetre of mercury.
    #[unit(symbol = "cmHg", aliases = ["cmHg"], scale = 0.013157895)]
    CentimetreMercury,
    /// Foot of water.
    #[unit(symbol = "ftH2O", aliases = ["ftH2O"], scale = 0.02949983)]
    FeetWater,
    /// Inch of mercury.
    #[unit(symbol = "inHg", aliases = ["inHg"], scale = 0.033421008)]
    InchMercury,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", aliases = ["psi"], scale = 0.06804619)]
    PoundSquareInch,
    /// Metre of water.
    #[unit(symbol = "mH2O", aliases = ["mH2O"], scale = 0.096783872)]
    MetreWater,
    /// Short (US) ton-force per square foot.
    #[unit(
        symbol = "tsf_short",
        aliases = ["tsf", "tsf_us", "tsf_short"],
        scale = 0.945081324
    )]
    TonneSquareFootShort,
    /// Technical atmosphere.
    #[unit(symbol = "at", aliases = ["at"], scale = 0.967838719)]
    TechnicalAtmosphere,
    /// Kilogram-force per square centimetre.
    #[unit(
        symbol = "kg/cm2",
        aliases = ["kg/cm²", "kg/cm^2", "kg/cm2"],
        scale = 0.967838719
    )]
    KilogramSquareCentimetre,
    /// Bar.
    #[unit(symbol = "bar", aliases = ["bars", "bar"], scale = 0.986923267)]
    Bar,
    /// Standard atmosphere.
    #[unit(
        symbol = "atm",
        aliases = ["atmospheres", "atmosphere", "atm"],
        scale = 1.0
    )]
    Atmosphere,
    /// Megapascal.
    #[unit(
        symbol = "MPa",
        aliases = ["MPa", "megapascals", "megapascal"],
        scale = 9.869232667
    )]
    Megapascal,
    /// Short (US) ton-force per square inch.
    #[unit(
        symbol = "tsi_short",
        aliases = ["tsi", "tsi_us", "tsi_short"],
        scale = 136.092009086
    )]
    TonneSquareInchShort,
    /// Long (UK) ton-force per square inch.
    #[unit(symbol = "tsi_long", aliases = ["tsi_uk", "tsi_long"], scale = 152.422992094)]
    TonneSquareInchLong,
}
