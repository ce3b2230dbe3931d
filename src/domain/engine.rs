//! Batch indicator engine: one [`IndicatorFrame`] per input bar.
//!
//! Each column is computed over the whole series with the functions in
//! [`crate::domain::indicator`]. All windows are trailing and include the current bar,
//! so frame `i` depends only on bars `0..=i`.

use crate::domain::indicator::bollinger::{calculate_bollinger, Band};
use crate::domain::indicator::ema::calculate_ema;
use crate::domain::indicator::extrema::rolling_extrema;
use crate::domain::indicator::{closes, typical_prices};
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::strategy::StrategyConfig;

/// A bar together with every indicator value computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub bar: OhlcvBar,
    pub ema_short: Option<f64>,
    pub ema_medium: Option<f64>,
    pub ema_long: Option<f64>,
    pub band_lower: Option<f64>,
    pub band_mid: Option<f64>,
    pub band_upper: Option<f64>,
    pub rolling_min: Option<f64>,
    pub rolling_max: Option<f64>,
}

impl IndicatorFrame {
    pub(crate) fn new(
        bar: OhlcvBar,
        emas: [Option<f64>; 3],
        band: Option<Band>,
        extrema: Option<(f64, f64)>,
    ) -> Self {
        let [ema_short, ema_medium, ema_long] = emas;
        IndicatorFrame {
            bar,
            ema_short,
            ema_medium,
            ema_long,
            band_lower: band.map(|b| b.lower),
            band_mid: band.map(|b| b.mid),
            band_upper: band.map(|b| b.upper),
            rolling_min: extrema.map(|(lo, _)| lo),
            rolling_max: extrema.map(|(_, hi)| hi),
        }
    }

    pub fn close(&self) -> f64 {
        self.bar.close
    }
}

/// Compute the full indicator set for one instrument's bars.
///
/// An empty input yields an empty output. Prices must be finite.
pub fn compute_indicators(bars: &[OhlcvBar], config: &StrategyConfig) -> Vec<IndicatorFrame> {
    let close = closes(bars);
    let ema_short = calculate_ema(&close, config.ema_short_period);
    let ema_medium = calculate_ema(&close, config.ema_medium_period);
    let ema_long = calculate_ema(&close, config.ema_long_period);
    let bands = calculate_bollinger(
        &typical_prices(bars),
        config.band_window,
        config.band_std_dev,
    );
    let (mins, maxs) = rolling_extrema(&close, config.extrema_window());

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let extrema = mins[i].zip(maxs[i]);
            IndicatorFrame::new(
                bar.clone(),
                [ema_short[i], ema_medium[i], ema_long[i]],
                bands[i],
                extrema,
            )
        })
        .collect()
}
