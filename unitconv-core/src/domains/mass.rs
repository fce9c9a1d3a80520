//! Mass units.
//!
//! The canonical base unit is [`Mass::Kilogram`]. Tons are metric tonnes; the kiloton family scales the tonne.

use unitconv_derive::Domain;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Mass {
    /// Nanogram.
    #[unit(
        symbol = "ng",
        aliases = ["nanogram", "nanogramme", "nanogrammes", "nanograms", "ng"],
        scale = 0.000000000001
    )]
    Nanogram,
    /// Microgram.
    #[unit(
        symbol = "μg",
        aliases = ["microgram", "microgramme", "microgrammes", "micrograms", "μg"],
        scale = 0.000000001
    )]
    Microgram,
    /// Milligram.
    #[unit(
        symbol = "mg",
        aliases = ["mg", "milligram", "milligramme", "milligrammes", "milligrams"],
        scale = 0.000001
    )]
    Milligram,
    /// Gram.
    #[unit(
        symbol = "g",
        aliases = ["g", "gram", "gramme", "grammes", "grams"],
        scale = 0.001
    )]
    Gram,
    /// Avoirdupois ounce.
    #[unit(symbol = "oz", aliases = ["ounce", "oz"], scale = 0.02834952)]
    Ounce,
    /// Avoirdupois pound.
    #[unit(symbol = "lb", aliases = ["lb", "pound"], scale = 0.4535923)]
    Pound,
    /// Kilogram.
    #[unit(
        symbol = "kg",
        aliases = ["kg", "kilogram", "kilogramme", "kilogrammes", "kilograms"],
        scale = 1.0
    )]
    Kilogram,
    /// Metric tonne.
    #[unit(
        symbol = "t",
        aliases = ["t", "ton", "tonne", "tonnes", "tons"],
        scale = 1000.0
    )]
    Ton,
    /// `1e3 t`.
    #[unit(
        symbol = "kt",
        aliases = ["kilotonne", "kiloton", "kilotonnes", "kilotons", "kt"],
        scale = 1000000.0
    )]
    Kiloton,
    /// `1e6 t`.
    #[unit(
        symbol = "Mt",
        aliases = ["megaton", "megatonne", "megatonnes", "megatons", "Mt"],
        scale = 1000000000.0
    )]
    Megaton,
    /// `1e9 t`.
    #[unit(
        symbol = "Gt",
        aliases = ["gigaton", "gigatonne", "gigatonnes", "gigatons", "Gt"],
        scale = 1000000000000.0
    )]
    Gigaton,
}
