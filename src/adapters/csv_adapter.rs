//! CSV file data adapter.
//!
//! One file per instrument, `<CODE>_<EXCHANGE>.csv`, with header
//! `date,open,high,low,close,volume`.

use crate::domain::error::SkipPumpError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::DataPort;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str, exchange: &str) -> PathBuf {
        self.base_path.join(format!("{}_{}.csv", code, exchange))
    }
}

/// Accepts `YYYY-MM-DD HH:MM:SS` or a bare date (taken as midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_price(record: &csv::StringRecord, idx: usize, name: &str) -> Result<f64, SkipPumpError> {
    record
        .get(idx)
        .ok_or_else(|| SkipPumpError::Data {
            reason: format!("missing {} column", name),
        })?
        .trim()
        .parse()
        .map_err(|e| SkipPumpError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_ohlcv(&self, code: &str, exchange: &str) -> Result<Vec<OhlcvBar>, SkipPumpError> {
        let path = self.csv_path(code, exchange);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SkipPumpError::NoData {
                code: code.to_string(),
                exchange: exchange.to_string(),
            },
            _ => SkipPumpError::Data {
                reason: format!("failed to read {}: {}", path.display(), e),
            },
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| SkipPumpError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| SkipPumpError::Data {
                reason: "missing date column".into(),
            })?;
            let timestamp = parse_timestamp(date_str).ok_or_else(|| SkipPumpError::Data {
                reason: format!("invalid date format: {:?}", date_str),
            })?;

            bars.push(OhlcvBar {
                code: code.to_string(),
                exchange: exchange.to_string(),
                timestamp,
                open: parse_price(&record, 1, "open")?,
                high: parse_price(&record, 2, "high")?,
                low: parse_price(&record, 3, "low")?,
                close: parse_price(&record, 4, "close")?,
                volume: parse_price(&record, 5, "volume")?,
            });
        }

        bars.sort_by_key(|b| b.timestamp);
        tracing::debug!(code, exchange, bars = bars.len(), path = %path.display(), "loaded bars");
        Ok(bars)
    }

    fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, SkipPumpError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| SkipPumpError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let suffix = format!("_{}.csv", exchange);
        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| SkipPumpError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(code) = name_str.strip_suffix(&suffix) {
                symbols.push(code.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        // Deliberately out of order; the adapter sorts.
        let csv_content = "date,open,high,low,close,volume\n\
            2024-01-15 00:30:00,110.0,120.0,105.0,115.0,55000\n\
            2024-01-15 00:00:00,100.0,110.0,90.0,105.0,50000\n\
            2024-01-15 00:15:00,105.0,115.0,100.0,110.0,60000.5\n";

        fs::write(path.join("BTC_BINANCE.csv"), csv_content).unwrap();
        fs::write(
            path.join("ETH_BINANCE.csv"),
            "date,open,high,low,close,volume\n",
        )
        .unwrap();
        fs::write(
            path.join("SOL_KRAKEN.csv"),
            "date,open,high,low,close,volume\n",
        )
        .unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_ohlcv_returns_sorted_bars() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let bars = adapter.fetch_ohlcv("BTC", "BINANCE").unwrap();

        assert_eq!(bars.len(), 3);
        assert_eq!(
            bars[0].timestamp,
            parse_timestamp("2024-01-15 00:00:00").unwrap()
        );
        assert_eq!(bars[0].open, 100.0);
        assert_eq!(bars[0].high, 110.0);
        assert_eq!(bars[0].low, 90.0);
        assert_eq!(bars[0].close, 105.0);
        assert_eq!(bars[0].volume, 50000.0);
        assert_eq!(bars[1].volume, 60000.5);
        assert_eq!(bars[2].close, 115.0);
        assert_eq!(bars[2].code, "BTC");
    }

    #[test]
    fn fetch_ohlcv_empty_file_is_empty_series() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.fetch_ohlcv("ETH", "BINANCE").unwrap().is_empty());
    }

    #[test]
    fn fetch_ohlcv_missing_file_is_no_data() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let result = adapter.fetch_ohlcv("XYZ", "BINANCE");
        assert!(matches!(result, Err(SkipPumpError::NoData { .. })));
    }

    #[test]
    fn fetch_ohlcv_rejects_bad_price() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("BAD_X.csv"),
            "date,open,high,low,close,volume\n2024-01-01,1,2,0.5,abc,10\n",
        )
        .unwrap();
        let adapter = CsvAdapter::new(dir.path().to_path_buf());

        match adapter.fetch_ohlcv("BAD", "X") {
            Err(SkipPumpError::Data { reason }) => assert!(reason.contains("close")),
            other => panic!("expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn parse_timestamp_accepts_bare_date() {
        let ts = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(ts, parse_timestamp("2024-03-01 00:00:00").unwrap());
        assert!(parse_timestamp("01/03/2024").is_none());
    }

    #[test]
    fn list_symbols_returns_exchange_symbols() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        assert_eq!(adapter.list_symbols("BINANCE").unwrap(), vec!["BTC", "ETH"]);
        assert_eq!(adapter.list_symbols("KRAKEN").unwrap(), vec!["SOL"]);
    }
}
