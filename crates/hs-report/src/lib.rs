//! hs-report: column-formatted text output for simulation runs.

pub mod table;
pub mod writers;

pub use table::{COLUMN_WIDTH, format_sig};
pub use writers::{SeriesWriter, SweepSummaryWriter, SweepTraceWriter};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
