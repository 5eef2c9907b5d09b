//! Blend composition (fixed mass fractions).

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use cc_core::numeric::{Tolerances, nearly_equal};

/// A refrigerant blend defined by normalized mass fractions.
///
/// Blends are specified industrially by mass fraction (e.g. R454B is
/// R32/R1234yf at 68.9/31.1 wt%), while the CoolProp fraction interface
/// is mole-based. The composition keeps mass fractions and converts via
/// component molar masses when the backend handle is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendComposition {
    /// Species and their mass fractions (always normalized to sum=1).
    items: Vec<(Species, f64)>,
}

impl BlendComposition {
    /// Create a composition from mass fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a
    /// positive sum, then normalizes to sum=1.
    pub fn new_mass_fractions(fractions: Vec<(Species, f64)>) -> FluidResult<Self> {
        if fractions.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty composition",
            });
        }

        // Validate and compute sum
        let mut sum = 0.0;
        for (_, frac) in &fractions {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mass fraction",
                });
            }
            if *frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mass fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "mass fractions sum to zero or non-finite",
            });
        }

        // Normalize
        let normalized: Vec<(Species, f64)> = fractions
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15) // Drop negligible components
            .collect();

        if normalized.is_empty() {
            return Err(FluidError::NonPhysical {
                what: "all mass fractions negligible",
            });
        }

        Ok(Self { items: normalized })
    }

    /// Get mass fraction of a species (0.0 if not present).
    pub fn mass_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Iterate over all components with non-zero mass fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Backend fluid name: component CoolProp names joined with `&`.
    pub fn coolprop_name(&self) -> String {
        self.items
            .iter()
            .map(|(s, _)| s.coolprop_name())
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Mole fractions in component order, converted from mass fractions.
    ///
    /// x_i = (w_i / M_i) / Σ_j (w_j / M_j). The result is normalized to
    /// sum=1 by construction.
    pub fn mole_fractions(&self) -> Vec<f64> {
        let moles: Vec<f64> = self
            .items
            .iter()
            .map(|(species, w)| w / species.molar_mass())
            .collect();
        let total: f64 = moles.iter().sum();
        moles.into_iter().map(|n| n / total).collect()
    }
}
