//! Free-text unit resolution and fast conversion across physical quantity domains.
//!
//! `unitconv` is the user-facing crate in this workspace. It re-exports the full API from `unitconv-core`: nine
//! predefined domains (speed, distance, rotation, time, temperature, pressure, mass, area, volume), the conversion
//! contract and the runtime registry.
//!
//! The core idea is: each domain is a closed enum of units with a private alias table. A symbol typed by a user is
//! looked up in *one* domain (`"m"` is a metre in [`Distance`] and a minute in [`Time`]), and values convert between
//! units of that domain only.
//!
//! # What this crate solves
//!
//! - Resolving user-typed symbols (`"km/h"`, `"knots"`, `"°F"`, `"cu ft"`) to units, exact-match and per domain.
//! - Converting values between units of one domain with a single multiply, or through kelvin for temperature.
//! - Arc-second/metre conversion at a given latitude.
//!
//! # What this crate does not try to solve
//!
//! - Scientific-grade precision: values are `f64` and the tables hold rounded engineering constants. This crate is
//!   unsuitable where certified or traceable accuracy is required.
//! - Unit algebra, dimensional analysis or fuzzy symbol matching.
//!
//! # Quick start
//!
//! Resolve a symbol and convert:
//!
//! ```rust
//! use unitconv::{Convert, Domain, Speed};
//!
//! let from = Speed::try_guess_unit("mph").unwrap();
//! let kph = Speed::convert(60.0, from, Speed::KilometreHour);
//! assert!((kph - 96.56).abs() < 1e-2);
//! ```
//!
//! Unresolved symbols are an ordinary outcome, not an error:
//!
//! ```rust
//! use unitconv::{Domain, Mass};
//!
//! assert_eq!(Mass::try_guess_unit("stone"), None);
//! ```
//!
//! Temperatures convert through kelvin and never go below absolute zero:
//!
//! ```rust
//! use unitconv::{Convert, Temperature};
//!
//! assert_eq!(Temperature::convert(-500.0, Temperature::Fahrenheit, Temperature::Kelvin), 0.0);
//! ```
//!
//! Pick the domain at runtime:
//!
//! ```rust
//! use unitconv::registry::{self, DomainKind};
//!
//! let domain: DomainKind = "volume".parse().unwrap();
//! let litres = registry::convert_symbols(domain, 1.0, "gal", "l").unwrap();
//! assert!((litres - 3.785411784).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! Domains are grouped under modules (their unit enums are also re-exported at the crate root):
//!
//! - `unitconv::speed`, `unitconv::distance` (plus arc-second helpers), `unitconv::rotation` (plus degree/radian
//!   factors), `unitconv::time`
//! - `unitconv::temperature` (plus absolute-zero and Planck bounds, `clamp_temperature`)
//! - `unitconv::pressure`, `unitconv::mass`, `unitconv::area`, `unitconv::volume`
//! - `unitconv::registry` for runtime dispatch
//!
//! # Feature flags
//!
//! - `serde`: symbol-based serialization of units, domains and quantities.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use unitconv_core::*;

/// Derive macro used by `unitconv-core` to define domain enums.
///
/// This macro expands in terms of `crate::Domain`, `crate::SymbolTable` and friends, so it is intended for use inside
/// `unitconv-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use unitconv_derive::Domain;
