//! hs-physio: body parameters and heat-exchange physics for heatstrain.
//!
//! Provides:
//! - Body and Environment parameter records (uom-typed, validated)
//! - Psychrometric curves (saturation and ambient vapor pressure)
//! - Skin-surface flux correlations (convective, evaporative, solar,
//!   black-body) plus retained comparison correlations
//! - The blood-flow / shell-fraction submodel and core-shell exchange
//! - Wet-bulb sweep grids
//!
//! Correlations are pure `f64` functions with units in their names;
//! downstream crates cache the values they need per run and call the
//! correlations every step.

pub mod body;
pub mod constants;
pub mod environment;
pub mod error;
pub mod exchange;
pub mod psychro;
pub mod sweeps;

// Re-exports for ergonomics
pub use body::{Body, Sex, basal_metabolic_rate_w, surface_area_m2};
pub use environment::Environment;
pub use error::{PhysioError, PhysioResult};
pub use sweeps::{WET_BULB_STEP_C, WetBulbSweep};
