//! Technical indicator implementations.
//!
//! Every function here maps an input series to an output of the same length. Bars that
//! do not yet have enough history carry `None` rather than a placeholder value, so
//! downstream comparisons can tell "not ready" apart from a real zero.
//!
//! Inputs are assumed finite; see [`crate::domain::ohlcv::validate_bars`].

pub mod bollinger;
pub mod ema;
pub mod extrema;
pub mod stddev;

use crate::domain::ohlcv::OhlcvBar;
use std::fmt;

/// A per-bar indicator output; `None` until the warm-up window is filled.
pub type Series = Vec<Option<f64>>;

pub fn closes(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

pub fn typical_prices(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(OhlcvBar::typical_price).collect()
}

/// Identity of a computed column, used for report headers and log context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorType {
    Ema(usize),
    Bollinger { period: usize, num_std_dev: f64 },
    RollingMin(usize),
    RollingMax(usize),
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Ema(period) => write!(f, "EMA({})", period),
            IndicatorType::Bollinger {
                period,
                num_std_dev,
            } => write!(f, "BOLLINGER({},{})", period, num_std_dev),
            IndicatorType::RollingMin(period) => write!(f, "MIN({})", period),
            IndicatorType::RollingMax(period) => write!(f, "MAX({})", period),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::ohlcv::OhlcvBar;
    use chrono::NaiveDate;

    pub fn make_bars(prices: &[f64]) -> Vec<OhlcvBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &close)| OhlcvBar {
                code: "TEST".into(),
                exchange: "TEST".into(),
                timestamp: start + chrono::Duration::minutes(15 * i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::make_bars;
    use super::*;

    #[test]
    fn indicator_type_display_ema() {
        assert_eq!(IndicatorType::Ema(21).to_string(), "EMA(21)");
    }

    #[test]
    fn indicator_type_display_bollinger() {
        let boll = IndicatorType::Bollinger {
            period: 20,
            num_std_dev: 2.0,
        };
        assert_eq!(boll.to_string(), "BOLLINGER(20,2)");
    }

    #[test]
    fn indicator_type_display_bollinger_keeps_precision() {
        let boll = IndicatorType::Bollinger {
            period: 20,
            num_std_dev: 2.555,
        };
        assert_eq!(boll.to_string(), "BOLLINGER(20,2.555)");
    }

    #[test]
    fn indicator_type_display_extrema() {
        assert_eq!(IndicatorType::RollingMin(55).to_string(), "MIN(55)");
        assert_eq!(IndicatorType::RollingMax(55).to_string(), "MAX(55)");
    }

    #[test]
    fn typical_prices_per_bar() {
        let mut bars = make_bars(&[10.0, 20.0]);
        bars[1].high = 26.0;
        bars[1].low = 14.0;
        let tp = typical_prices(&bars);
        assert_eq!(tp, vec![10.0, 20.0]);

        bars[1].close = 23.0;
        let tp = typical_prices(&bars);
        assert!((tp[1] - (26.0 + 14.0 + 23.0) / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn closes_preserve_order() {
        let bars = make_bars(&[3.0, 1.0, 2.0]);
        assert_eq!(closes(&bars), vec![3.0, 1.0, 2.0]);
    }
}
