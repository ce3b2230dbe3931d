//! Signal report port trait.

use crate::domain::analysis::Analysis;
use crate::domain::error::SkipPumpError;
use std::path::Path;

/// Which bars a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRows {
    /// Every bar, with indicator columns.
    AllBars,
    /// Only bars where an entry or exit fired.
    SignalsOnly,
}

/// Port for writing per-instrument signal reports.
pub trait ReportPort {
    fn write(
        &self,
        analyses: &[Analysis],
        rows: ReportRows,
        output_path: &Path,
    ) -> Result<(), SkipPumpError>;
}
