//! cc-cycle: vapor-compression cycle solver for scroll compressors.
//!
//! One operation: [`solve`]. Given a refrigerant (pure fluid or registered
//! blend) and operating temperatures, it computes saturation pressures,
//! the four cycle state points, and three COP figures:
//!
//! - `cop_carnot`: the Carnot limit between the two temperatures
//! - `cop_ideal_cycle`: the ideal cycle with isentropic compression
//! - `cop_scroll_limit`: the ideal cycle derated by compressor isentropic
//!   efficiency and motor efficiency
//!
//! Each call opens its own property handle and drops it on return; there
//! is no state shared between calls. Failures come back as a single
//! [`CycleError`] tagged with the step at which they occurred.
//!
//! # Example
//!
//! ```no_run
//! use cc_cycle::{CycleInputs, solve};
//!
//! let inputs = CycleInputs::new("R410A", 5.0, 50.0);
//! let perf = solve(&inputs).unwrap();
//! println!("scroll-limit COP: {}", perf.cop_scroll_limit);
//! ```

pub mod error;
pub mod inputs;
pub mod result;
pub mod solver;

// Re-exports for ergonomics
pub use error::{CycleError, Stage};
pub use inputs::CycleInputs;
pub use result::CyclePerformance;
pub use solver::solve;
