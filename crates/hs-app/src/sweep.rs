//! Sweep controller: one integrator run per wet-bulb condition.

use std::io::Write;

use hs_core::units::{celsius, cm, kg, mps};
use hs_physio::{Body, Environment, WetBulbSweep};
use hs_report::{SweepSummaryWriter, SweepTraceWriter};
use hs_sim::{SimOptions, Termination, ThermalState, TwoNodeModel, run_to_termination};
use tracing::info;

use crate::config::SweepConfig;
use crate::error::AppResult;

/// Initial core temperature of every sweep run [C].
pub const INITIAL_CORE_C: f64 = 37.0;
/// Initial skin temperature of every sweep run [C].
pub const INITIAL_SKIN_C: f64 = 35.0;

/// Terminal state of one sweep condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionResult {
    pub wet_bulb_c: f64,
    pub terminal_core_c: f64,
    pub termination: Termination,
    pub steps: usize,
}

/// Everything a caller needs after a finished sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Per-condition results in ascending wet-bulb order.
    pub conditions: Vec<ConditionResult>,
}

impl SweepReport {
    /// Conditions that ended at the hyperthermic limit.
    pub fn hyperthermic_count(&self) -> usize {
        self.conditions
            .iter()
            .filter(|c| c.termination == Termination::Hyperthermia)
            .count()
    }
}

/// Run the full wet-bulb sweep from the config, writing the trajectory
/// trace and the per-condition summary to the two sinks.
///
/// Each condition gets a fresh thermal state and a fresh model; nothing
/// carries over between conditions except the writers.
pub fn run_sweep<W1, W2>(config: &SweepConfig, trace: W1, summary: W2) -> AppResult<SweepReport>
where
    W1: Write,
    W2: Write,
{
    let body = Body::new(
        kg(config.mass_kg),
        cm(config.height_cm),
        config.age_yr,
        config.sex,
        config.reflectivity,
    )?;
    let base = Environment::new(
        celsius(config.dry_bulb_c),
        celsius(config.wet_bulb_low_c),
        mps(config.wind_mps),
    )?;
    let sweep = WetBulbSweep::new(config.wet_bulb_low_c, config.wet_bulb_high_c)?;

    let mut trace = SweepTraceWriter::new(trace);
    let mut summary = SweepSummaryWriter::new(summary)?;
    let opts = SimOptions::default();

    let mut conditions = Vec::new();
    for wet_bulb_c in sweep.values() {
        let env = base.with_wet_bulb_c(wet_bulb_c);
        let model = TwoNodeModel::new(&body, &env, config.metabolic_override_w)?;
        let initial = ThermalState::new(INITIAL_CORE_C, INITIAL_SKIN_C);
        let outcome = run_to_termination(&model, &initial, &opts)?;

        trace.begin_condition(wet_bulb_c)?;
        for record in &outcome.samples {
            trace.row(record)?;
        }
        trace.row(&outcome.final_record)?;
        summary.row(wet_bulb_c, outcome.final_record.state.core_c)?;

        conditions.push(ConditionResult {
            wet_bulb_c,
            terminal_core_c: outcome.final_record.state.core_c,
            termination: outcome.termination,
            steps: outcome.steps,
        });
    }

    trace.into_inner().flush()?;
    summary.into_inner().flush()?;

    info!(
        conditions = conditions.len(),
        "wet-bulb sweep finished: {}", sweep
    );
    Ok(SweepReport { conditions })
}
