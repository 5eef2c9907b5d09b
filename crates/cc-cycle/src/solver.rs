//! The cycle solver.

use crate::error::{CycleError, Stage};
use crate::inputs::CycleInputs;
use crate::result::{CyclePerformance, round_to};
use cc_core::numeric::{Tolerances, bisect};
use cc_core::units::{celsius, k, to_celsius};
use cc_fluids::{PropertyHandle, SaturationPoint, lookup_blend};

/// Offset above the dew line for the discharge search lower bound [K].
/// Single-phase PT queries are invalid on the two-phase boundary itself.
const DISCHARGE_BRACKET_OFFSET_K: f64 = 0.1;

/// Width of the discharge temperature search bracket [K]. Wide enough to
/// cover realistic discharge superheat for common refrigerants at common
/// pressure ratios.
const DISCHARGE_BRACKET_SPAN_K: f64 = 150.0;

const DISCHARGE_TOLERANCES: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 0.0,
};
const DISCHARGE_MAX_ITER: usize = 200;

/// Solve one vapor-compression cycle.
///
/// Opens a fresh property handle for the requested refrigerant, walks the
/// four state points, and derives the three COP figures. Exactly one of
/// a [`CyclePerformance`] record or a stage-tagged [`CycleError`] is
/// produced; no state survives the call.
pub fn solve(inputs: &CycleInputs) -> Result<CyclePerformance, CycleError> {
    inputs.validate()?;

    // Fluid resolution: registered blends get mixture setup, anything
    // else is passed to the backend as a pure fluid name.
    let mut handle = match lookup_blend(&inputs.refrigerant) {
        Some(entry) => entry
            .composition()
            .and_then(|comp| PropertyHandle::blend(&comp)),
        None => PropertyHandle::pure(&inputs.refrigerant),
    }
    .map_err(|e| CycleError::at(Stage::Initialization, e))?;

    tracing::debug!(
        refrigerant = %inputs.refrigerant,
        backend_fluid = handle.fluid(),
        "resolved fluid"
    );

    let t_evap = celsius(inputs.t_evap_c);
    let t_cond = celsius(inputs.t_cond_c);

    // Carnot reference. Ordering is deliberately not validated: an
    // inverted condition yields a non-positive value here and a domain
    // error at the energy balance below.
    let cop_carnot = t_evap.value / (t_cond.value - t_evap.value);

    // Saturation pressures, dew-point convention on BOTH sides. For
    // zeotropic blends the dew and bubble pressures differ, so this
    // convention is part of the contract.
    let p_evap = handle
        .saturation_pressure(SaturationPoint::Dew, t_evap)
        .map_err(|e| CycleError::at(Stage::PressureCalculation, e))?;
    let p_cond = handle
        .saturation_pressure(SaturationPoint::Dew, t_cond)
        .map_err(|e| CycleError::at(Stage::PressureCalculation, e))?;

    tracing::debug!(
        p_evap_pa = p_evap.value,
        p_cond_pa = p_cond.value,
        "saturation pressures"
    );

    // Point 1: compressor suction.
    let t_suction = k(t_evap.value + inputs.superheat_k);
    let h1 = handle
        .enthalpy(p_evap, t_suction)
        .map_err(|e| CycleError::at(Stage::Suction, e))?;
    let s1 = handle
        .entropy(p_evap, t_suction)
        .map_err(|e| CycleError::at(Stage::Suction, e))?;

    // Point 2 (ideal): isentropic discharge. Find T with
    // s(p_cond, T) = s1, bracketed from just above the condenser dew
    // line upward.
    let t_dew_cond = handle
        .saturation_temperature(SaturationPoint::Dew, p_cond)
        .map_err(|e| CycleError::at(Stage::IsentropicDischarge, e))?;
    let t_min = t_dew_cond.value + DISCHARGE_BRACKET_OFFSET_K;
    let t_max = t_min + DISCHARGE_BRACKET_SPAN_K;

    let t2_ideal = bisect(
        |t| handle.entropy(p_cond, k(t)).map(|s| s - s1),
        [t_min, t_max],
        DISCHARGE_TOLERANCES,
        DISCHARGE_MAX_ITER,
    )
    .map_err(|e| CycleError::at(Stage::IsentropicDischarge, e))?;

    let h2_ideal = handle
        .enthalpy(p_cond, k(t2_ideal))
        .map_err(|e| CycleError::at(Stage::IsentropicDischarge, e))?;

    tracing::debug!(t2_ideal_k = t2_ideal, "isentropic discharge converged");

    // Point 3: liquid line. Subcooling is defined against the bubble
    // point.
    let t_bubble = handle
        .saturation_temperature(SaturationPoint::Bubble, p_cond)
        .map_err(|e| CycleError::at(Stage::Liquid, e))?;
    let t_liquid = k(t_bubble.value - inputs.subcooling_k);
    let h3 = handle
        .enthalpy(p_cond, t_liquid)
        .map_err(|e| CycleError::at(Stage::Liquid, e))?;

    // Point 4: isenthalpic throttle, no query.
    let h4 = h3;

    // Energy balance.
    let q_cooling = h1 - h4;
    let w_ideal = h2_ideal - h1;
    if w_ideal <= 0.0 {
        return Err(CycleError::at(
            Stage::EnergyBalance,
            "ideal compression work is zero or negative",
        ));
    }
    let cop_ideal_cycle = q_cooling / w_ideal;

    // Real-machine derating.
    let w_actual = w_ideal / (inputs.is_efficiency * inputs.motor_efficiency);
    if w_actual <= 0.0 {
        return Err(CycleError::at(
            Stage::EnergyBalance,
            "actual compression work is zero or negative",
        ));
    }
    let cop_scroll_limit = q_cooling / w_actual;

    Ok(CyclePerformance {
        refrigerant: inputs.refrigerant.clone(),
        operating_condition: format!(
            "evaporating {} °C / condensing {} °C",
            inputs.t_evap_c, inputs.t_cond_c
        ),
        cop_carnot: round_to(cop_carnot, 3),
        cop_ideal_cycle: round_to(cop_ideal_cycle, 3),
        cop_scroll_limit: round_to(cop_scroll_limit, 3),
        pressure_ratio: round_to(p_cond.value / p_evap.value, 2),
        discharge_temp_c: round_to(to_celsius(k(t2_ideal)), 2),
        liquid_temp_c: round_to(to_celsius(t_liquid), 2),
        is_efficiency: inputs.is_efficiency,
        motor_efficiency: inputs.motor_efficiency,
    })
}
