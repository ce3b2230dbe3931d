//! Entry/exit rule evaluation.
//!
//! Stateless: each [`IndicatorFrame`] is judged on its own. A rule referencing an
//! undefined indicator evaluates to `false`.
//!
//! # Rules
//!
//! Enter long when all hold:
//! - `close < ema_short`
//! - `close < ema_medium`
//! - `close == rolling_min`
//! - `close <= entry_band_factor * band_lower`
//!
//! Exit long when all hold:
//! - `close > ema_short`
//! - `close > ema_medium`
//! - `close >= exit_band_factor * band_upper`
//!
//! Comparisons are exact. The rolling-min check is plain float equality: the rolling
//! minimum is a copy of one of the window's closes, never a derived value.

use crate::domain::engine::IndicatorFrame;
use crate::domain::strategy::StrategyConfig;

/// Entry and exit flags for one bar. Both may be set; resolving that is up to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalFrame {
    pub enter_long: bool,
    pub exit_long: bool,
}

pub fn evaluate_entry(frame: &IndicatorFrame, config: &StrategyConfig) -> bool {
    let close = frame.close();
    let (Some(ema_short), Some(ema_medium), Some(rolling_min), Some(band_lower)) = (
        frame.ema_short,
        frame.ema_medium,
        frame.rolling_min,
        frame.band_lower,
    ) else {
        return false;
    };

    close < ema_short
        && close < ema_medium
        && close == rolling_min
        && close <= config.entry_band_factor * band_lower
}

pub fn evaluate_exit(frame: &IndicatorFrame, config: &StrategyConfig) -> bool {
    let close = frame.close();
    let (Some(ema_short), Some(ema_medium), Some(band_upper)) =
        (frame.ema_short, frame.ema_medium, frame.band_upper)
    else {
        return false;
    };

    close > ema_short && close > ema_medium && close >= config.exit_band_factor * band_upper
}

pub fn evaluate(frame: &IndicatorFrame, config: &StrategyConfig) -> SignalFrame {
    SignalFrame {
        enter_long: evaluate_entry(frame, config),
        exit_long: evaluate_exit(frame, config),
    }
}

pub fn evaluate_all(frames: &[IndicatorFrame], config: &StrategyConfig) -> Vec<SignalFrame> {
    frames.iter().map(|f| evaluate(f, config)).collect()
}
