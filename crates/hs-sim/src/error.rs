//! Error types for simulation operations.

use hs_core::HsError;
use hs_physio::PhysioError;
use thiserror::Error;

/// Errors encountered while integrating the thermal state.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Neither termination condition fired within {steps} steps")]
    NoConvergence { steps: usize },

    #[error("Physiology error: {message}")]
    Physiology { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<PhysioError> for SimError {
    fn from(e: PhysioError) -> Self {
        SimError::Physiology {
            message: e.to_string(),
        }
    }
}

impl From<HsError> for SimError {
    fn from(e: HsError) -> Self {
        match e {
            HsError::NonFinite { what, .. } => SimError::NonPhysical { what },
            HsError::InvalidArg { what } | HsError::Invariant { what } => {
                SimError::InvalidArg { what }
            }
        }
    }
}
