//! Predefined quantity domains.
//!
//! Each module declares one closed unit enum and derives its descriptor tables with `#[derive(Domain)]`.
//!
//! ## Modules
//!
//! - [`speed`]: base unit metres per second.
//! - [`distance`]: base unit metre, plus arc-second/metre helpers.
//! - [`rotation`]: base unit degree; owns the degree/radian factors.
//! - [`time`]: base unit second.
//! - [`temperature`]: affine conversions through kelvin, clamped to physical bounds.
//! - [`pressure`]: base unit standard atmosphere.
//! - [`mass`]: base unit kilogram.
//! - [`area`]: base unit square metre.
//! - [`volume`]: base unit cubic metre.

pub mod area;
pub mod distance;
pub mod mass;
pub mod pressure;
pub mod rotation;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
