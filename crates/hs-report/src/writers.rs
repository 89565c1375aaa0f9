//! Writers for the three output tables: the per-condition trajectory
//! trace, the sweep summary, and the single-condition time series.

use std::io::Write;

use hs_sim::SimRecord;

use crate::ReportResult;
use crate::table::{format_sig, write_row};

/// Column names of the per-condition trajectory table.
pub const TRACE_COLUMNS: [&str; 11] = [
    "sec", "conv", "evap", "met", "solar", "bbRad", "shell", "core", "Tskin", "Tcore", "water(L)",
];
/// Column names of the sweep summary table.
pub const SUMMARY_COLUMNS: [&str; 2] = ["Tweb", "Tcore"];
/// Column names of the time-series table.
pub const SERIES_COLUMNS: [&str; 3] = ["time(min)", "Tc", "Ts"];

/// Trajectory writer for sweep runs: one block per condition, each
/// holding a blank separator line, a wet-bulb label, the column header
/// and the sampled rows.
pub struct SweepTraceWriter<W: Write> {
    out: W,
}

impl<W: Write> SweepTraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Open a condition block.
    pub fn begin_condition(&mut self, wet_bulb_c: f64) -> ReportResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Tweb: {}", format_sig(wet_bulb_c))?;
        write_row(&mut self.out, &TRACE_COLUMNS)
    }

    /// One sampled step. The core-shell exchange term stays internal;
    /// the `shell` and `core` columns carry the two interface fluxes.
    pub fn row(&mut self, record: &SimRecord) -> ReportResult<()> {
        write_row(
            &mut self.out,
            &[
                format_sig(record.elapsed_whole_seconds() as f64),
                format_sig(record.fluxes.convective_w),
                format_sig(record.fluxes.evaporative_w),
                format_sig(record.fluxes.metabolic_w),
                format_sig(record.fluxes.solar_w),
                format_sig(record.fluxes.radiant_w),
                format_sig(record.fluxes.skin_w),
                format_sig(record.fluxes.core_w),
                format_sig(record.state.skin_c),
                format_sig(record.state.core_c),
                format_sig(record.state.water_l),
            ],
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Summary writer for sweep runs: header first, then one row per
/// condition with its terminal core temperature.
pub struct SweepSummaryWriter<W: Write> {
    out: W,
}

impl<W: Write> SweepSummaryWriter<W> {
    /// Create the writer and emit the header immediately.
    pub fn new(mut out: W) -> ReportResult<Self> {
        write_row(&mut out, &SUMMARY_COLUMNS)?;
        Ok(Self { out })
    }

    pub fn row(&mut self, wet_bulb_c: f64, terminal_core_c: f64) -> ReportResult<()> {
        write_row(
            &mut self.out,
            &[format_sig(wet_bulb_c), format_sig(terminal_core_c)],
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Time-series writer: header first, then one row per sampled record
/// with elapsed whole minutes and both compartment temperatures.
pub struct SeriesWriter<W: Write> {
    out: W,
}

impl<W: Write> SeriesWriter<W> {
    /// Create the writer and emit the header immediately.
    pub fn new(mut out: W) -> ReportResult<Self> {
        write_row(&mut out, &SERIES_COLUMNS)?;
        Ok(Self { out })
    }

    pub fn row(&mut self, record: &SimRecord) -> ReportResult<()> {
        write_row(
            &mut self.out,
            &[
                format_sig(record.elapsed_whole_minutes() as f64),
                format_sig(record.state.core_c),
                format_sig(record.state.skin_c),
            ],
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::COLUMN_WIDTH;
    use hs_sim::{FluxSnapshot, SimRecord, ThermalState};

    fn sample_record() -> SimRecord {
        SimRecord {
            step: 1200,
            fluxes: FluxSnapshot {
                convective_w: -92.8,
                evaporative_w: -841.25,
                metabolic_w: 88.4268,
                solar_w: 0.0,
                radiant_w: -32.34,
                core_shell_w: 787.96,
                skin_w: -17.84,
                core_w: -69.95,
            },
            state: ThermalState {
                core_c: 36.9,
                skin_c: 34.99,
                water_l: 0.000348,
            },
        }
    }

    #[test]
    fn trace_block_layout() {
        let mut out = Vec::new();
        let mut writer = SweepTraceWriter::new(&mut out);
        writer.begin_condition(22.5).unwrap();
        writer.row(&sample_record()).unwrap();
        drop(writer);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Tweb: 22.5");
        assert_eq!(lines[2].len(), 11 * COLUMN_WIDTH);
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            TRACE_COLUMNS.to_vec()
        );
        // Step 1200 is 120 whole seconds; the core-shell term is absent
        assert_eq!(
            lines[3].split_whitespace().collect::<Vec<_>>(),
            vec![
                "120", "-92.8", "-841.25", "88.4268", "0", "-32.34", "-17.84", "-69.95", "34.99",
                "36.9", "0.000348",
            ]
        );
    }

    #[test]
    fn summary_rows_follow_the_header() {
        let mut out = Vec::new();
        let mut writer = SweepSummaryWriter::new(&mut out).unwrap();
        writer.row(22.0, 36.5039).unwrap();
        writer.row(22.02, 36.5045).unwrap();
        drop(writer);

        let text = String::from_utf8(out).unwrap();
        let expected = "Tweb         Tcore        \n\
                        22           36.5039      \n\
                        22.02        36.5045      \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn series_rows_carry_minutes_and_both_temperatures() {
        let mut out = Vec::new();
        let mut writer = SeriesWriter::new(&mut out).unwrap();
        writer.row(&sample_record()).unwrap();
        drop(writer);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            SERIES_COLUMNS.to_vec()
        );
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["2", "36.9", "34.99"]
        );
    }
}
