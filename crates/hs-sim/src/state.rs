//! Thermal state, per-step flux snapshots, and sampled records.

/// Length of one integration step in simulated seconds.
pub const STEP_SECONDS: f64 = 0.1;
/// Integration steps per simulated second.
pub const STEPS_PER_SECOND: usize = 10;
/// Integration steps per simulated minute.
pub const STEPS_PER_MINUTE: usize = 600;

/// Interface-flux sentinel that keeps the run loop from terminating
/// before the first step [W].
pub const FLUX_SENTINEL_W: f64 = 1.0;

/// The two-compartment thermal state advanced by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalState {
    /// Core compartment temperature [C]
    pub core_c: f64,
    /// Skin (shell) compartment temperature [C]
    pub skin_c: f64,
    /// Cumulative net water balance [L]. Diagnostic only: written to the
    /// trace output, never consumed by any termination or control
    /// decision.
    pub water_l: f64,
}

impl ThermalState {
    /// Fresh state at the given compartment temperatures, water at zero.
    pub fn new(core_c: f64, skin_c: f64) -> Self {
        Self {
            core_c,
            skin_c,
            water_l: 0.0,
        }
    }
}

/// All flux terms computed in one integration step [W].
///
/// `skin_w` and `core_w` are the net interface fluxes already scaled by
/// the step length; the remaining terms are the unscaled correlation
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxSnapshot {
    /// Convective gain of the skin from ambient air
    pub convective_w: f64,
    /// Evaporative gain of the skin (negative while sweat evaporates)
    pub evaporative_w: f64,
    /// Metabolic heat production
    pub metabolic_w: f64,
    /// Solar gain (zero in the current model)
    pub solar_w: f64,
    /// Black-body exchange between ambient and skin
    pub radiant_w: f64,
    /// Core -> shell exchange
    pub core_shell_w: f64,
    /// Net skin-interface flux, step-scaled
    pub skin_w: f64,
    /// Net core-interface flux, step-scaled
    pub core_w: f64,
}

impl FluxSnapshot {
    /// Snapshot holding the nonzero sentinel on both interface fluxes so
    /// a run always executes at least one step.
    pub fn sentinel() -> Self {
        Self {
            convective_w: 0.0,
            evaporative_w: 0.0,
            metabolic_w: 0.0,
            solar_w: 0.0,
            radiant_w: 0.0,
            core_shell_w: 0.0,
            skin_w: FLUX_SENTINEL_W,
            core_w: FLUX_SENTINEL_W,
        }
    }
}

/// One sampled step: the fluxes computed during the step and the state
/// they produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimRecord {
    /// Zero-based index of the step this record was sampled at
    pub step: usize,
    pub fluxes: FluxSnapshot,
    pub state: ThermalState,
}

impl SimRecord {
    /// Whole simulated seconds elapsed at this record (truncating).
    pub fn elapsed_whole_seconds(&self) -> usize {
        self.step / STEPS_PER_SECOND
    }

    /// Whole simulated minutes elapsed at this record (truncating).
    pub fn elapsed_whole_minutes(&self) -> usize {
        self.step / STEPS_PER_MINUTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_zero_water() {
        let state = ThermalState::new(37.0, 35.0);
        assert_eq!(state.water_l, 0.0);
    }

    #[test]
    fn sentinel_keeps_interface_fluxes_nonzero() {
        let sentinel = FluxSnapshot::sentinel();
        assert_eq!(sentinel.skin_w, FLUX_SENTINEL_W);
        assert_eq!(sentinel.core_w, FLUX_SENTINEL_W);
        assert_eq!(sentinel.convective_w, 0.0);
    }

    #[test]
    fn record_time_conversions_truncate() {
        let record = SimRecord {
            step: 1234,
            fluxes: FluxSnapshot::sentinel(),
            state: ThermalState::new(37.0, 35.0),
        };
        assert_eq!(record.elapsed_whole_seconds(), 123);
        assert_eq!(record.elapsed_whole_minutes(), 2);
    }
}
