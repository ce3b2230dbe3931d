//! OHLCV bar representation and input validation.

use crate::domain::error::SkipPumpError;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvBar {
    pub code: String,
    pub exchange: String,
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcvBar {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// First non-finite price field, if any. Volume is not used by any indicator and is
    /// left unchecked.
    fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
    }
}

/// Reject a series containing any NaN or infinite price.
///
/// Comparisons against NaN are always false, so a poisoned series would silently emit
/// no signals. The whole series is rejected instead, naming the first offending bar.
pub fn validate_bars(bars: &[OhlcvBar]) -> Result<(), SkipPumpError> {
    for (index, bar) in bars.iter().enumerate() {
        if let Some((field, value)) = bar.first_non_finite() {
            return Err(SkipPumpError::InvalidBar {
                code: bar.code.clone(),
                index,
                field,
                value,
            });
        }
    }
    Ok(())
}
