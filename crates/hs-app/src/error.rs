//! Error types for the hs-app controller layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the model crates and
/// provides a unified interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to create output file: {}", path.display())]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Physiology error: {0}")]
    Physiology(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hs-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hs_physio::PhysioError> for AppError {
    fn from(err: hs_physio::PhysioError) -> Self {
        AppError::Physiology(err.to_string())
    }
}

impl From<hs_sim::SimError> for AppError {
    fn from(err: hs_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<hs_report::ReportError> for AppError {
    fn from(err: hs_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
