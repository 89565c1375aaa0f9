//! Fixed-step integration of the two-node thermal model.
//!
//! [`TwoNodeModel`] reduces a body and an environment to per-step flux
//! evaluations; [`run_to_termination`] drives the explicit loop until
//! the core goes hyperthermic or both interface fluxes settle below
//! tolerance.

pub mod error;
pub mod model;
pub mod sim;
pub mod state;

pub use error::{SimError, SimResult};
pub use model::TwoNodeModel;
pub use sim::{
    FLUX_TOLERANCE_W, HYPERTHERMIA_LIMIT_C, RunOutcome, SimOptions, Termination,
    run_to_termination,
};
pub use state::{FluxSnapshot, STEP_SECONDS, STEPS_PER_MINUTE, SimRecord, ThermalState};
