//! Static registry of named refrigerant blends.

use crate::composition::BlendComposition;
use crate::error::FluidResult;
use crate::species::Species;

/// One registered blend: a trade name mapped to fixed mass fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    /// Components with mass fractions summing to 1.0.
    pub components: &'static [(Species, f64)],
}

impl BlendEntry {
    pub fn matches(&self, query: &str) -> bool {
        self.canonical_id.eq_ignore_ascii_case(query.trim())
    }

    /// Build the validated composition for this entry.
    pub fn composition(&self) -> FluidResult<BlendComposition> {
        BlendComposition::new_mass_fractions(self.components.to_vec())
    }
}

// ASHRAE 34 nominal mass fractions.
const BLEND_REGISTRY: [BlendEntry; 1] = [BlendEntry {
    canonical_id: "R454B",
    display_name: "R454B (R32/R1234yf)",
    components: &[(Species::R32, 0.689), (Species::R1234yf, 0.311)],
}];

pub fn registered_blends() -> &'static [BlendEntry] {
    &BLEND_REGISTRY
}

/// Look up a blend by name, case-insensitive. `None` means the name should
/// be passed through to the backend as a pure fluid.
pub fn lookup_blend(name: &str) -> Option<&'static BlendEntry> {
    BLEND_REGISTRY.iter().find(|entry| entry.matches(name))
}
