//! hs-app: configuration loading and run orchestration.
//!
//! Sits between the model crates and the CLI: loads the positional
//! config records, drives the sweep and time-series controllers, and
//! funnels every backend error into [`AppError`].

pub mod config;
pub mod error;
pub mod series;
pub mod sweep;

pub use config::{FieldFallback, SeriesConfig, SweepConfig};
pub use error::{AppError, AppResult};
pub use series::{SeriesReport, run_series};
pub use sweep::{ConditionResult, SweepReport, run_sweep};
