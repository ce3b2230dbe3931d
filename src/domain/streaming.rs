//! Streaming indicator engine for live bar-by-bar use.
//!
//! Folds one bar at a time and yields the same [`IndicatorFrame`] the batch engine
//! produces at that position. EMAs carry their running value; the band keeps a
//! bounded window and recomputes mean and deviation from it directly, so no error
//! accumulates across bars; rolling extrema reuse the batch monotonic-deque tracker.

use crate::domain::engine::IndicatorFrame;
use crate::domain::indicator::bollinger::Band;
use crate::domain::indicator::ema::smoothing_factor;
use crate::domain::indicator::extrema::RollingExtrema;
use crate::domain::indicator::stddev::{mean, population_stddev};
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::strategy::StrategyConfig;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct EmaState {
    period: usize,
    k: f64,
    count: usize,
    sum: f64,
    value: f64,
}

impl EmaState {
    fn new(period: usize) -> Self {
        Self {
            period,
            k: smoothing_factor(period),
            count: 0,
            sum: 0.0,
            value: 0.0,
        }
    }

    fn push(&mut self, x: f64) -> Option<f64> {
        if self.period == 0 {
            return None;
        }
        self.count += 1;
        if self.count < self.period {
            self.sum += x;
            None
        } else if self.count == self.period {
            self.sum += x;
            self.value = self.sum / self.period as f64;
            Some(self.value)
        } else {
            self.value = x * self.k + self.value * (1.0 - self.k);
            Some(self.value)
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.period);
    }
}

#[derive(Debug, Clone)]
struct BandState {
    window: usize,
    num_std_dev: f64,
    values: VecDeque<f64>,
}

impl BandState {
    fn new(window: usize, num_std_dev: f64) -> Self {
        Self {
            window,
            num_std_dev,
            values: VecDeque::new(),
        }
    }

    fn push(&mut self, x: f64) -> Option<Band> {
        if self.window == 0 {
            return None;
        }
        if self.values.len() == self.window {
            self.values.pop_front();
        }
        self.values.push_back(x);
        if self.values.len() < self.window {
            return None;
        }
        let slice = self.values.make_contiguous();
        let mid = mean(slice);
        Some(Band::around(mid, population_stddev(slice, mid), self.num_std_dev))
    }
}

#[derive(Debug, Clone)]
pub struct StreamingEngine {
    ema_short: EmaState,
    ema_medium: EmaState,
    ema_long: EmaState,
    band: BandState,
    extrema: RollingExtrema,
    bars_seen: usize,
}

impl StreamingEngine {
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            ema_short: EmaState::new(config.ema_short_period),
            ema_medium: EmaState::new(config.ema_medium_period),
            ema_long: EmaState::new(config.ema_long_period),
            band: BandState::new(config.band_window, config.band_std_dev),
            extrema: RollingExtrema::new(config.extrema_window()),
            bars_seen: 0,
        }
    }

    /// Fold in the next bar. Bars must arrive in chronological order.
    pub fn push(&mut self, bar: &OhlcvBar) -> IndicatorFrame {
        self.bars_seen += 1;
        let emas = [
            self.ema_short.push(bar.close),
            self.ema_medium.push(bar.close),
            self.ema_long.push(bar.close),
        ];
        let band = self.band.push(bar.typical_price());
        let extrema = self.extrema.push(bar.close);
        IndicatorFrame::new(bar.clone(), emas, band, extrema)
    }

    pub fn bars_seen(&self) -> usize {
        self.bars_seen
    }

    /// Drop all history, returning to the warm-up state.
    pub fn reset(&mut self) {
        self.ema_short.reset();
        self.ema_medium.reset();
        self.ema_long.reset();
        self.band.values.clear();
        self.extrema.reset();
        self.bars_seen = 0;
    }
}
