//! cc-core: stable foundation for coolcycle.
//!
//! Contains:
//! - units (uom SI types + constructors, Celsius helpers)
//! - numeric (Real + tolerances + a bracketing bisection root-finder)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
