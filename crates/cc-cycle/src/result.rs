//! Cycle performance record.

use serde::{Deserialize, Serialize};

/// Result of one successful solve call. Produced once, never mutated.
///
/// COP figures are rounded to 3 decimal places; pressure ratio and the
/// reported temperatures to 2. All temperatures here are back in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePerformance {
    /// Refrigerant echo (name as requested).
    pub refrigerant: String,

    /// Operating condition echo, e.g. "evaporating 5 °C / condensing 50 °C".
    pub operating_condition: String,

    /// Carnot COP between the two temperatures (theoretical maximum).
    pub cop_carnot: f64,

    /// Ideal cycle COP with isentropic compression.
    pub cop_ideal_cycle: f64,

    /// Real-machine limit COP after efficiency derating.
    pub cop_scroll_limit: f64,

    /// Condensing over evaporating pressure.
    pub pressure_ratio: f64,

    /// Ideal (isentropic) discharge temperature [°C].
    pub discharge_temp_c: f64,

    /// Liquid-line temperature after subcooling [°C].
    pub liquid_temp_c: f64,

    /// Isentropic efficiency echo.
    pub is_efficiency: f64,

    /// Motor efficiency echo.
    pub motor_efficiency: f64,
}

/// Round to the given number of decimal places for display fields.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}
