//! Strategy parameters for the skip-pump EMA/band rules.

use crate::domain::error::SkipPumpError;
use crate::domain::indicator::IndicatorType;

pub const DEFAULT_EMA_SHORT_PERIOD: usize = 21;
pub const DEFAULT_EMA_MEDIUM_PERIOD: usize = 55;
pub const DEFAULT_EMA_LONG_PERIOD: usize = 120;
pub const DEFAULT_BAND_WINDOW: usize = 20;
pub const DEFAULT_BAND_STD_DEV: f64 = 2.0;
pub const DEFAULT_ENTRY_BAND_FACTOR: f64 = 0.92;
pub const DEFAULT_EXIT_BAND_FACTOR: f64 = 1.03;

/// Numeric knobs for the indicator engine and the entry/exit rules.
///
/// Changing these shifts signal sensitivity; the shape of the rules stays fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    pub name: String,
    pub ema_short_period: usize,
    pub ema_medium_period: usize,
    pub ema_long_period: usize,
    pub band_window: usize,
    pub band_std_dev: f64,
    /// Entry requires `close <= entry_band_factor * band_lower`.
    pub entry_band_factor: f64,
    /// Exit requires `close >= exit_band_factor * band_upper`.
    pub exit_band_factor: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            name: "EMA Skip Pump".into(),
            ema_short_period: DEFAULT_EMA_SHORT_PERIOD,
            ema_medium_period: DEFAULT_EMA_MEDIUM_PERIOD,
            ema_long_period: DEFAULT_EMA_LONG_PERIOD,
            band_window: DEFAULT_BAND_WINDOW,
            band_std_dev: DEFAULT_BAND_STD_DEV,
            entry_band_factor: DEFAULT_ENTRY_BAND_FACTOR,
            exit_band_factor: DEFAULT_EXIT_BAND_FACTOR,
        }
    }
}

impl StrategyConfig {
    /// Rolling min/max share the medium EMA's lookback.
    pub fn extrema_window(&self) -> usize {
        self.ema_medium_period
    }

    /// Bars needed before every indicator is defined.
    pub fn warmup_bars(&self) -> usize {
        self.ema_short_period
            .max(self.ema_medium_period)
            .max(self.ema_long_period)
            .max(self.band_window)
    }

    pub fn indicators(&self) -> Vec<IndicatorType> {
        vec![
            IndicatorType::Ema(self.ema_short_period),
            IndicatorType::Ema(self.ema_medium_period),
            IndicatorType::Ema(self.ema_long_period),
            IndicatorType::Bollinger {
                period: self.band_window,
                num_std_dev: self.band_std_dev,
            },
            IndicatorType::RollingMin(self.extrema_window()),
            IndicatorType::RollingMax(self.extrema_window()),
        ]
    }

    pub fn validate(&self) -> Result<(), SkipPumpError> {
        for (key, period) in [
            ("ema_short_period", self.ema_short_period),
            ("ema_medium_period", self.ema_medium_period),
            ("ema_long_period", self.ema_long_period),
            ("band_window", self.band_window),
        ] {
            if period == 0 {
                return Err(SkipPumpError::config_invalid(
                    "strategy",
                    key,
                    format!("{key} must be at least 1"),
                ));
            }
        }

        if !self.band_std_dev.is_finite() || self.band_std_dev < 0.0 {
            return Err(SkipPumpError::config_invalid(
                "strategy",
                "band_std_dev",
                "band_std_dev must be finite and non-negative",
            ));
        }

        for (key, factor) in [
            ("entry_band_factor", self.entry_band_factor),
            ("exit_band_factor", self.exit_band_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(SkipPumpError::config_invalid(
                    "strategy",
                    key,
                    format!("{key} must be finite and positive"),
                ));
            }
        }

        Ok(())
    }
}
