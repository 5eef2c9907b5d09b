//! cc-fluids: refrigerant identification and property queries for coolcycle.
//!
//! Provides:
//! - Blend component species (R32, R1234yf, ...) with molar masses
//! - Mass-fraction blend compositions
//! - A static registry of named refrigerant blends (e.g. R454B)
//! - A per-call `PropertyHandle` over the CoolProp backend (via `rfluids`)
//!
//! # Architecture
//!
//! The `PropertyHandle` wraps one CoolProp `AbstractState`. The underlying
//! state is overwritten by every query, so a handle is a call-local
//! resource: construct one per cycle solve, thread it mutably through the
//! queries, and drop it when the solve returns. Handles are never shared
//! between calls.

pub mod blends;
pub mod composition;
pub mod error;
pub mod handle;
pub mod species;

// Re-exports for ergonomics
pub use blends::{BlendEntry, lookup_blend, registered_blends};
pub use composition::BlendComposition;
pub use error::{FluidError, FluidResult};
pub use handle::{PropertyHandle, SaturationPoint, SpecEnthalpy, SpecEntropy};
pub use species::Species;
