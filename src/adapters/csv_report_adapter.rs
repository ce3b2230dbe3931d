//! CSV signal report writer.
//!
//! One row per bar (or per signalling bar), all instruments in one file. Undefined
//! indicator values are written as empty cells and flags as `0`/`1`.

use crate::domain::analysis::Analysis;
use crate::domain::engine::IndicatorFrame;
use crate::domain::error::SkipPumpError;
use crate::domain::rule_eval::SignalFrame;
use crate::ports::report_port::{ReportPort, ReportRows};
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 13] = [
    "code",
    "timestamp",
    "close",
    "ema_short",
    "ema_medium",
    "ema_long",
    "band_lower",
    "band_mid",
    "band_upper",
    "rolling_min",
    "rolling_max",
    "enter_long",
    "exit_long",
];

pub struct CsvReportAdapter;

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn record(code: &str, frame: &IndicatorFrame, signal: &SignalFrame) -> Vec<String> {
    vec![
        code.to_string(),
        frame.bar.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        frame.bar.close.to_string(),
        cell(frame.ema_short),
        cell(frame.ema_medium),
        cell(frame.ema_long),
        cell(frame.band_lower),
        cell(frame.band_mid),
        cell(frame.band_upper),
        cell(frame.rolling_min),
        cell(frame.rolling_max),
        flag(signal.enter_long).to_string(),
        flag(signal.exit_long).to_string(),
    ]
}

/// Write the report to any sink. Returns the number of data rows written.
pub fn write_report<W: Write>(
    sink: W,
    analyses: &[Analysis],
    rows: ReportRows,
) -> Result<usize, SkipPumpError> {
    let to_data_err = |e: csv::Error| SkipPumpError::Data {
        reason: format!("CSV write error: {}", e),
    };

    let mut wtr = csv::Writer::from_writer(sink);
    wtr.write_record(HEADER).map_err(to_data_err)?;

    let mut written = 0;
    for analysis in analyses {
        for (frame, signal) in analysis.rows() {
            if rows == ReportRows::SignalsOnly && !(signal.enter_long || signal.exit_long) {
                continue;
            }
            wtr.write_record(record(&analysis.code, frame, signal))
                .map_err(to_data_err)?;
            written += 1;
        }
    }

    wtr.flush()?;
    Ok(written)
}

impl ReportPort for CsvReportAdapter {
    fn write(
        &self,
        analyses: &[Analysis],
        rows: ReportRows,
        output_path: &Path,
    ) -> Result<(), SkipPumpError> {
        let file = std::fs::File::create(output_path)?;
        let written = write_report(file, analyses, rows)?;
        tracing::info!(path = %output_path.display(), rows = written, "report written");
        Ok(())
    }
}
