//! Per-call CoolProp property handle.

use crate::composition::BlendComposition;
use crate::error::{FluidError, FluidResult};
use cc_core::units::{Pressure, Temperature, k, pa};
use rfluids::io::{FluidInputPair, FluidParam};
use rfluids::native::AbstractState;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Which side of the two-phase dome a saturation query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationPoint {
    /// Saturated liquid (vapor quality 0).
    Bubble,
    /// Saturated vapor (vapor quality 1).
    Dew,
}

impl SaturationPoint {
    pub fn vapor_quality(self) -> f64 {
        match self {
            SaturationPoint::Bubble => 0.0,
            SaturationPoint::Dew => 1.0,
        }
    }
}

/// A stateful handle onto the CoolProp HEOS backend for one fluid.
///
/// Every query overwrites the internal thermodynamic state and reads the
/// result back, so all query methods take `&mut self`. A handle belongs to
/// exactly one solve call: construct, query, drop. Never reuse a handle
/// across calls or share it between threads.
#[derive(Debug)]
pub struct PropertyHandle {
    state: AbstractState,
    fluid: String,
}

impl PropertyHandle {
    const BACKEND: &'static str = "HEOS";

    /// Open a handle for a pure or pseudo-pure fluid by CoolProp name.
    ///
    /// The name is passed through as-is (trimmed); unknown names surface
    /// as a backend error.
    pub fn pure(name: &str) -> FluidResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty fluid name",
            });
        }
        let state = AbstractState::new(Self::BACKEND, name).map_err(|e| FluidError::Backend {
            message: format!("failed to initialize fluid '{name}': {e}"),
        })?;
        Ok(Self {
            state,
            fluid: name.to_string(),
        })
    }

    /// Open a handle for a fixed-composition blend.
    ///
    /// CoolProp's fraction interface is mole-based for HEOS, so the
    /// blend's mass fractions are converted through component molar
    /// masses before being applied.
    pub fn blend(composition: &BlendComposition) -> FluidResult<Self> {
        let name = composition.coolprop_name();
        let mut state =
            AbstractState::new(Self::BACKEND, &name).map_err(|e| FluidError::Backend {
                message: format!("failed to initialize mixture '{name}': {e}"),
            })?;
        state
            .set_fractions(&composition.mole_fractions())
            .map_err(|e| FluidError::Backend {
                message: format!("failed to set fractions for '{name}': {e}"),
            })?;
        Ok(Self { state, fluid: name })
    }

    /// Backend fluid name this handle was opened with.
    pub fn fluid(&self) -> &str {
        &self.fluid
    }

    /// Saturation pressure at the given temperature (QT query).
    pub fn saturation_pressure(
        &mut self,
        at: SaturationPoint,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        validate_temperature(t)?;
        self.update(FluidInputPair::QT, at.vapor_quality(), t.value)?;
        let p = self.read(FluidParam::P)?;
        if !p.is_finite() || p <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "saturation pressure must be positive and finite",
            });
        }
        Ok(pa(p))
    }

    /// Saturation temperature at the given pressure (PQ query).
    pub fn saturation_temperature(
        &mut self,
        at: SaturationPoint,
        p: Pressure,
    ) -> FluidResult<Temperature> {
        validate_pressure(p)?;
        self.update(FluidInputPair::PQ, p.value, at.vapor_quality())?;
        let t = self.read(FluidParam::T)?;
        if !t.is_finite() || t <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "saturation temperature must be positive and finite",
            });
        }
        Ok(k(t))
    }

    /// Mass-specific enthalpy [J/kg] at a single-phase (p, T) state.
    pub fn enthalpy(&mut self, p: Pressure, t: Temperature) -> FluidResult<SpecEnthalpy> {
        validate_pressure(p)?;
        validate_temperature(t)?;
        self.update(FluidInputPair::PT, p.value, t.value)?;
        let h = self.read(FluidParam::HMass)?;
        if !h.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(h)
    }

    /// Mass-specific entropy [J/(kg·K)] at a single-phase (p, T) state.
    pub fn entropy(&mut self, p: Pressure, t: Temperature) -> FluidResult<SpecEntropy> {
        validate_pressure(p)?;
        validate_temperature(t)?;
        self.update(FluidInputPair::PT, p.value, t.value)?;
        let s = self.read(FluidParam::SMass)?;
        if !s.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "entropy must be finite",
            });
        }
        Ok(s)
    }

    fn update(&mut self, pair: FluidInputPair, value1: f64, value2: f64) -> FluidResult<()> {
        self.state
            .update(pair, value1, value2)
            .map_err(|e| FluidError::Backend {
                message: format!(
                    "state update failed for '{}' ({value1}, {value2}): {e}",
                    self.fluid
                ),
            })
    }

    fn read(&self, param: FluidParam) -> FluidResult<f64> {
        self.state
            .keyed_output(param)
            .map_err(|e| FluidError::Backend {
                message: format!("property read failed for '{}': {e}", self.fluid),
            })
    }
}

fn validate_pressure(p: Pressure) -> FluidResult<()> {
    if !p.value.is_finite() || p.value <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "pressure must be positive and finite",
        });
    }
    Ok(())
}

fn validate_temperature(t: Temperature) -> FluidResult<()> {
    if !t.value.is_finite() || t.value <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "temperature must be positive and finite",
        });
    }
    Ok(())
}
