//! Shared conversion rules.
//!
//! Multiplicative domains convert through their base unit in a single step:
//!
//! ```text
//! v_dst = v_src * (src.scale / dst.scale)
//! ```
//!
//! Both scale reads come from the same generated `match`, so there is one source of truth per unit and a unit
//! converted to itself is never touched.

use crate::domain::{RatioDomain, Scalar};

/// Applies the multiplicative-ratio rule.
///
/// No bounds are checked on `value`; negative values, `NaN` and infinities follow IEEE-754 semantics.
///
/// ```rust
/// use unitconv_core::rules;
/// use unitconv_core::distance::Distance;
///
/// let m = rules::ratio(1.0, Distance::Mile, Distance::Metre);
/// assert!((m - 1609.344).abs() < 1e-9);
/// ```
#[inline]
pub fn ratio<D: RatioDomain>(value: Scalar, from: D, to: D) -> Scalar {
    if from == to {
        return value;
    }
    value * (from.scale() / to.scale())
}
