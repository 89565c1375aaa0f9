//! Run loop driving the two-node model until a termination condition
//! fires.

use std::fmt;

use hs_core::ensure_finite;
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::model::TwoNodeModel;
use crate::state::{FLUX_SENTINEL_W, FluxSnapshot, STEPS_PER_MINUTE, SimRecord, ThermalState};

/// Core temperature at which a run stops as hyperthermic [C].
pub const HYPERTHERMIA_LIMIT_C: f64 = 42.0;
/// Interface-flux magnitude below which the state counts as settled [W].
pub const FLUX_TOLERANCE_W: f64 = 1e-4;
/// Default cap on integration steps before a run is abandoned.
pub const DEFAULT_MAX_STEPS: usize = 5_000_000;

/// Knobs for a single run.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    /// Sampling stride in steps; step 0 is always sampled.
    pub sample_every: usize,
    /// Step cap; exceeding it fails the run with `NoConvergence`.
    pub max_steps: usize,
    /// Equilibrium tolerance applied to both interface fluxes [W].
    /// Must sit below [`FLUX_SENTINEL_W`] or the seeded termination
    /// test would fire before the first step.
    pub flux_tolerance_w: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            sample_every: STEPS_PER_MINUTE,
            max_steps: DEFAULT_MAX_STEPS,
            flux_tolerance_w: FLUX_TOLERANCE_W,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Both interface fluxes fell below the tolerance.
    Equilibrium,
    /// The core temperature reached the hyperthermic limit.
    Hyperthermia,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Equilibrium => write!(f, "equilibrium"),
            Termination::Hyperthermia => write!(f, "hyperthermia"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub termination: Termination,
    /// Total steps executed; always at least one.
    pub steps: usize,
    /// The last executed step, whether or not the stride sampled it.
    pub final_record: SimRecord,
    /// Stride-sampled records, step 0 first.
    pub samples: Vec<SimRecord>,
}

/// Integrate from `initial` until the core reaches the hyperthermic
/// limit or both interface fluxes settle below the tolerance.
///
/// The termination test runs against the fluxes of the previous step,
/// seeded with a nonzero sentinel, so at least one step always executes
/// even when `initial` is already an equilibrium point.
pub fn run_to_termination(
    model: &TwoNodeModel,
    initial: &ThermalState,
    opts: &SimOptions,
) -> SimResult<RunOutcome> {
    if opts.sample_every == 0 {
        return Err(SimError::InvalidArg {
            what: "sampling stride must be positive",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "step cap must be positive",
        });
    }
    if !opts.flux_tolerance_w.is_finite()
        || opts.flux_tolerance_w <= 0.0
        || opts.flux_tolerance_w >= FLUX_SENTINEL_W
    {
        return Err(SimError::InvalidArg {
            what: "flux tolerance must be positive and below the startup sentinel",
        });
    }
    ensure_finite(initial.core_c, "initial core temperature")?;
    ensure_finite(initial.skin_c, "initial skin temperature")?;
    if initial.core_c >= HYPERTHERMIA_LIMIT_C {
        return Err(SimError::InvalidArg {
            what: "initial core temperature is already hyperthermic",
        });
    }

    let mut state = *initial;
    let mut fluxes = FluxSnapshot::sentinel();
    let mut steps: usize = 0;
    let mut samples = Vec::new();

    while state.core_c < HYPERTHERMIA_LIMIT_C
        && (fluxes.skin_w.abs() > opts.flux_tolerance_w
            || fluxes.core_w.abs() > opts.flux_tolerance_w)
    {
        if steps >= opts.max_steps {
            return Err(SimError::NoConvergence { steps });
        }
        let (snapshot, next) = model.step(&state)?;
        fluxes = snapshot;
        state = next;
        if steps % opts.sample_every == 0 {
            samples.push(SimRecord {
                step: steps,
                fluxes,
                state,
            });
        }
        steps += 1;
    }

    let termination = if state.core_c >= HYPERTHERMIA_LIMIT_C {
        Termination::Hyperthermia
    } else {
        Termination::Equilibrium
    };
    debug!(steps, core_c = state.core_c, "run stopped by {termination}");

    Ok(RunOutcome {
        termination,
        steps,
        final_record: SimRecord {
            step: steps - 1,
            fluxes,
            state,
        },
        samples,
    })
}
