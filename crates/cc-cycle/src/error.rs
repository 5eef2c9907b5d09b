//! Stage-tagged cycle solver errors.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Processing step at which a cycle calculation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fluid resolution and backend construction.
    Initialization,
    /// Dew-point pressures at the evaporating/condensing temperatures.
    PressureCalculation,
    /// Compressor suction state.
    Suction,
    /// Isentropic discharge root-find.
    IsentropicDischarge,
    /// Subcooled liquid-line state.
    Liquid,
    /// Non-positive ideal or actual compression work.
    EnergyBalance,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Initialization => "Initialization",
            Stage::PressureCalculation => "Pressure Calculation",
            Stage::Suction => "Point 1 (Suction)",
            Stage::IsentropicDischarge => "Point 2 (Isentropic Discharge)",
            Stage::Liquid => "Point 3 (Liquid)",
            Stage::EnergyBalance => "Energy Balance",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Failure record for one solve call: the stage it occurred at plus a
/// human-readable cause. Mutually exclusive with a performance record.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[error("calculation failed at step '{stage}': {message}")]
pub struct CycleError {
    pub stage: Stage,
    pub message: String,
}

impl CycleError {
    pub(crate) fn at(stage: Stage, cause: impl fmt::Display) -> Self {
        Self {
            stage,
            message: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels_match_step_names() {
        assert_eq!(Stage::Initialization.label(), "Initialization");
        assert_eq!(
            Stage::IsentropicDischarge.label(),
            "Point 2 (Isentropic Discharge)"
        );
        assert_eq!(Stage::Liquid.label(), "Point 3 (Liquid)");
    }

    #[test]
    fn error_display_includes_stage_and_cause() {
        let err = CycleError::at(Stage::PressureCalculation, "backend rejected state");
        let msg = err.to_string();
        assert!(msg.contains("Pressure Calculation"));
        assert!(msg.contains("backend rejected state"));
    }

    #[test]
    fn error_serializes_with_stage_label() {
        let err = CycleError::at(Stage::Suction, "out of range");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Point 1 (Suction)"));
        assert!(json.contains("out of range"));
    }
}
