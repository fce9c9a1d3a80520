//! Area units.
//!
//! The canonical base unit is [`Area::SquareMetre`]. Imperial areas are squares of the international inch, foot and
//! yard.

use unitconv_derive::Domain;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Domain)]
pub enum Area {
    /// Square millimetre.
    #[unit(symbol = "mm2", aliases = ["mm2", "mm^2", "mm²"], scale = 0.000001)]
    SquareMillimetre,
    /// Square centimetre.
    #[unit(symbol = "cm2", aliases = ["cm2", "cm^2", "cm²"], scale = 0.0001)]
    SquareCentimetre,
    /// Square inch.
    #[unit(
        symbol = "in2",
        aliases = ["\"²", "in2", "in^2", "in²"],
        scale = 0.00064516
    )]
    SquareInch,
    /// Square metre.
    #[unit(symbol = "m2", aliases = ["m2", "m^2", "m²"], scale = 1.0)]
    SquareMetre,
    /// Square foot.
    #[unit(
        symbol = "ft2",
        aliases = ["'2", "ft2", "ft^2", "ft²"],
        scale = 0.09290304
    )]
    SquareFoot,
    /// International acre.
    #[unit(symbol = "ac", aliases = ["ac", "acre"], scale = 4046.8564224)]
    Acre,
    /// Hectare.
    #[unit(symbol = "ha", aliases = ["ha", "hectare"], scale = 10000.0)]
    Hectare,
    /// Square yard.
    #[unit(symbol = "yd2", aliases = ["yd2", "yd^2", "yd²"], scale = 0.83612736)]
    SquareYard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Convert, Domain};
    use approx::assert_relative_eq;

    #[test]
    fn hectare_in_acres() {
        assert_relative_eq!(
            Area::convert(1.0, Area::Hectare, Area::Acre),
            2.4710538,
            max_relative = 1e-7
        );
    }

    #[test]
    fn square_yard_is_nine_square_feet() {
        assert_relative_eq!(
            Area::convert(1.0, Area::SquareYard, Area::SquareFoot),
            9.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn superscript_and_caret_forms() {
        for alias in ["m2", "m^2", "m²"] {
            assert_eq!(Area::try_guess_unit(alias), Some(Area::SquareMetre));
        }
        assert_eq!(Area::try_guess_unit("\"²"), Some(Area::SquareInch));
        assert_eq!(Area::try_guess_unit("'2"), Some(Area::SquareFoot));
    }
}
