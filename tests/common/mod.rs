#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use skippump::domain::error::SkipPumpError;
pub use skippump::domain::ohlcv::OhlcvBar;
use skippump::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, code: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(code.to_string(), bars);
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ohlcv(&self, code: &str, exchange: &str) -> Result<Vec<OhlcvBar>, SkipPumpError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(SkipPumpError::Data {
                reason: reason.clone(),
            });
        }
        self.data
            .get(code)
            .cloned()
            .ok_or_else(|| SkipPumpError::NoData {
                code: code.to_string(),
                exchange: exchange.to_string(),
            })
    }

    fn list_symbols(&self, _exchange: &str) -> Result<Vec<String>, SkipPumpError> {
        let mut codes: Vec<String> = self.data.keys().cloned().collect();
        codes.sort();
        Ok(codes)
    }
}

pub fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A bar where open, high, low and close all equal `price`.
pub fn flat_bar(code: &str, index: usize, price: f64) -> OhlcvBar {
    OhlcvBar {
        code: code.to_string(),
        exchange: "BINANCE".to_string(),
        timestamp: start_time() + chrono::Duration::minutes(15 * index as i64),
        open: price,
        high: price,
        low: price,
        close: price,
        volume: 0.0,
    }
}

pub fn bars_from_closes(code: &str, closes: &[f64]) -> Vec<OhlcvBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| flat_bar(code, i, c))
        .collect()
}

/// `len` bars at `base`, with `price` substituted at `at`.
pub fn flat_with_shock(code: &str, len: usize, base: f64, at: usize, price: f64) -> Vec<OhlcvBar> {
    let closes: Vec<f64> = (0..len)
        .map(|i| if i == at { price } else { base })
        .collect();
    bars_from_closes(code, &closes)
}

pub fn generate_trend(code: &str, count: usize, start_price: f64, step: f64) -> Vec<OhlcvBar> {
    (0..count)
        .map(|i| {
            let close = start_price + step * i as f64;
            OhlcvBar {
                code: code.to_string(),
                exchange: "BINANCE".to_string(),
                timestamp: start_time() + chrono::Duration::minutes(15 * i as i64),
                open: close - step / 2.0,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}
