//! Physiological model errors.

use hs_core::HsError;
use thiserror::Error;

/// Result type for physiological calculations.
pub type PhysioResult<T> = Result<T, PhysioError>;

/// Errors that can occur while evaluating body or heat-exchange quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysioError {
    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Non-physical values (negative mass, wind speed, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Blood flow at or below the shell-fraction singularity.
    #[error("Degenerate thermal state: blood flow {flow} L/(h*m^2) at the shell-fraction singularity")]
    DegenerateBloodFlow { flow: f64 },
}

impl From<PhysioError> for HsError {
    fn from(err: PhysioError) -> Self {
        match err {
            PhysioError::InvalidArg { what } => HsError::InvalidArg { what },
            PhysioError::NonPhysical { what } => HsError::InvalidArg { what },
            PhysioError::DegenerateBloodFlow { .. } => HsError::Invariant {
                what: "blood flow at the shell-fraction singularity",
            },
        }
    }
}
