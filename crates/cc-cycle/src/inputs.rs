//! Cycle operating inputs.

use crate::error::{CycleError, Stage};
use serde::{Deserialize, Serialize};

fn default_superheat_k() -> f64 {
    5.0
}

fn default_subcooling_k() -> f64 {
    5.0
}

fn default_is_efficiency() -> f64 {
    0.80
}

fn default_motor_efficiency() -> f64 {
    0.93
}

/// Operating condition for one solve call.
///
/// All fields are independent scalars; nothing is persisted between
/// calls. Optional fields default to typical scroll-compressor values
/// when deserialized from a request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    /// Refrigerant name: a registered blend id (e.g. "R454B") or any
    /// CoolProp pure/pseudo-pure fluid name (e.g. "R410A", "R32").
    pub refrigerant: String,

    /// Evaporating temperature [°C].
    pub t_evap_c: f64,

    /// Condensing temperature [°C].
    pub t_cond_c: f64,

    /// Suction superheat [K], >= 0.
    #[serde(default = "default_superheat_k")]
    pub superheat_k: f64,

    /// Liquid subcooling [K], >= 0.
    #[serde(default = "default_subcooling_k")]
    pub subcooling_k: f64,

    /// Compressor isentropic efficiency, in (0, 1].
    #[serde(default = "default_is_efficiency")]
    pub is_efficiency: f64,

    /// Motor efficiency, in (0, 1].
    #[serde(default = "default_motor_efficiency")]
    pub motor_efficiency: f64,
}

impl CycleInputs {
    /// Inputs for the given refrigerant and temperatures, with default
    /// superheat, subcooling, and efficiencies.
    pub fn new(refrigerant: impl Into<String>, t_evap_c: f64, t_cond_c: f64) -> Self {
        Self {
            refrigerant: refrigerant.into(),
            t_evap_c,
            t_cond_c,
            superheat_k: default_superheat_k(),
            subcooling_k: default_subcooling_k(),
            is_efficiency: default_is_efficiency(),
            motor_efficiency: default_motor_efficiency(),
        }
    }

    /// Basic sanity checks on the scalar inputs.
    ///
    /// Temperature ordering is deliberately NOT checked here: a
    /// condensing temperature at or below the evaporating temperature
    /// flows through and surfaces later as an energy-balance error.
    pub fn validate(&self) -> Result<(), CycleError> {
        let finite = [
            ("t_evap_c", self.t_evap_c),
            ("t_cond_c", self.t_cond_c),
            ("superheat_k", self.superheat_k),
            ("subcooling_k", self.subcooling_k),
            ("is_efficiency", self.is_efficiency),
            ("motor_efficiency", self.motor_efficiency),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(CycleError::at(
                    Stage::Initialization,
                    format!("{name} must be finite, got {value}"),
                ));
            }
        }

        if self.superheat_k < 0.0 {
            return Err(CycleError::at(
                Stage::Initialization,
                "superheat must be non-negative",
            ));
        }
        if self.subcooling_k < 0.0 {
            return Err(CycleError::at(
                Stage::Initialization,
                "subcooling must be non-negative",
            ));
        }
        if self.is_efficiency <= 0.0 || self.is_efficiency > 1.0 {
            return Err(CycleError::at(
                Stage::Initialization,
                "isentropic efficiency must be in (0, 1]",
            ));
        }
        if self.motor_efficiency <= 0.0 || self.motor_efficiency > 1.0 {
            return Err(CycleError::at(
                Stage::Initialization,
                "motor efficiency must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
