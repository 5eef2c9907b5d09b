//! Refrigerant blend component species.

/// Pure refrigerants that appear as components of registered blends.
///
/// Arbitrary pure (and pseudo-pure) fluids reach the backend by name
/// string; this enum only covers fluids a blend definition may reference,
/// because blend setup needs their molar masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Difluoromethane (HFC-32)
    R32,
    /// Pentafluoroethane (HFC-125)
    R125,
    /// 1,1,1,2-Tetrafluoroethane (HFC-134a)
    R134a,
    /// 2,3,3,3-Tetrafluoropropene (HFO-1234yf)
    R1234yf,
}

impl Species {
    /// Get CoolProp fluid name for this species.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Species::R32 => "R32",
            Species::R125 => "R125",
            Species::R134a => "R134a",
            Species::R1234yf => "R1234yf",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    ///
    /// Values sourced from standard reference data (e.g., NIST).
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::R32 => 52.024,
            Species::R125 => 120.022,
            Species::R134a => 102.031,
            Species::R1234yf => 114.042,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coolprop_mapping() {
        assert_eq!(Species::R32.coolprop_name(), "R32");
        assert_eq!(Species::R1234yf.coolprop_name(), "R1234yf");
    }

    #[test]
    fn molar_masses_are_plausible() {
        assert!(Species::R32.molar_mass() > 50.0);
        assert!(Species::R1234yf.molar_mass() > Species::R32.molar_mass());
    }
}
