//! Time-series controller: a single run at one fixed condition.

use std::io::Write;

use hs_core::units::{celsius, cm, kg, mps};
use hs_physio::{Body, Environment};
use hs_report::SeriesWriter;
use hs_sim::{SimOptions, Termination, ThermalState, TwoNodeModel, run_to_termination};
use tracing::info;

use crate::config::SeriesConfig;
use crate::error::AppResult;

/// Initial core temperature of a time-series run [C].
pub const INITIAL_CORE_C: f64 = 36.5;
/// Initial skin temperature of a time-series run [C].
pub const INITIAL_SKIN_C: f64 = 31.3;

/// Terminal state of a finished time-series run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesReport {
    pub termination: Termination,
    pub steps: usize,
    pub terminal_core_c: f64,
    pub terminal_skin_c: f64,
}

/// Run the integrator once at the configured condition, writing one
/// minute-resolution row per sampled record.
pub fn run_series<W: Write>(config: &SeriesConfig, out: W) -> AppResult<SeriesReport> {
    let body = Body::new(
        kg(config.mass_kg),
        cm(config.height_cm),
        config.age_yr,
        config.sex,
        config.reflectivity,
    )?;
    let env = Environment::new(
        celsius(config.dry_bulb_c),
        celsius(config.wet_bulb_c),
        mps(config.wind_mps),
    )?;
    let model = TwoNodeModel::new(&body, &env, config.metabolic_override_w)?;

    let initial = ThermalState::new(INITIAL_CORE_C, INITIAL_SKIN_C);
    let outcome = run_to_termination(&model, &initial, &SimOptions::default())?;

    let mut writer = SeriesWriter::new(out)?;
    for record in &outcome.samples {
        writer.row(record)?;
    }
    writer.into_inner().flush()?;

    info!(
        steps = outcome.steps,
        "time series finished by {}", outcome.termination
    );
    Ok(SeriesReport {
        termination: outcome.termination,
        steps: outcome.steps,
        terminal_core_c: outcome.final_record.state.core_c,
        terminal_skin_c: outcome.final_record.state.skin_c,
    })
}
