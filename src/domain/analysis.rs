//! Per-instrument pipeline: bars → indicator frames → signal frames.
//!
//! Each instrument is analysed independently; [`analyze_universe`] reports a separate
//! result per code so one bad series never takes down the batch.

use crate::domain::engine::{compute_indicators, IndicatorFrame};
use crate::domain::error::SkipPumpError;
use crate::domain::ohlcv::{validate_bars, OhlcvBar};
use crate::domain::rule_eval::{evaluate_all, SignalFrame};
use crate::domain::strategy::StrategyConfig;
use crate::ports::data_port::DataPort;

/// Indicator and signal output for one instrument, aligned 1:1 with its bars.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub code: String,
    pub exchange: String,
    pub frames: Vec<IndicatorFrame>,
    pub signals: Vec<SignalFrame>,
}

impl Analysis {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.signals.iter().filter(|s| s.enter_long).count()
    }

    pub fn exit_count(&self) -> usize {
        self.signals.iter().filter(|s| s.exit_long).count()
    }

    /// Frames paired with their signals, in bar order.
    pub fn rows(&self) -> impl Iterator<Item = (&IndicatorFrame, &SignalFrame)> {
        self.frames.iter().zip(&self.signals)
    }
}

/// Run the full pipeline over one instrument's bars.
///
/// Fails fast on any non-finite price. An empty series is not an error and yields an
/// empty analysis.
pub fn analyze(
    code: &str,
    exchange: &str,
    bars: &[OhlcvBar],
    config: &StrategyConfig,
) -> Result<Analysis, SkipPumpError> {
    validate_bars(bars)?;

    let frames = compute_indicators(bars, config);
    let signals = evaluate_all(&frames, config);

    let analysis = Analysis {
        code: code.to_string(),
        exchange: exchange.to_string(),
        frames,
        signals,
    };

    if bars.len() < config.warmup_bars() {
        tracing::debug!(
            code,
            bars = bars.len(),
            warmup = config.warmup_bars(),
            "series shorter than longest lookback"
        );
    }
    tracing::debug!(
        code,
        exchange,
        bars = analysis.len(),
        entries = analysis.entry_count(),
        exits = analysis.exit_count(),
        "analysed instrument"
    );

    Ok(analysis)
}

/// Outcome for one code in a batch run.
#[derive(Debug)]
pub struct CodeOutcome {
    pub code: String,
    pub result: Result<Analysis, SkipPumpError>,
}

/// Fetch and analyse each code. Failures are logged and returned alongside successes.
pub fn analyze_universe(
    data_port: &dyn DataPort,
    codes: &[String],
    exchange: &str,
    config: &StrategyConfig,
) -> Vec<CodeOutcome> {
    codes
        .iter()
        .map(|code| {
            let result = data_port
                .fetch_ohlcv(code, exchange)
                .and_then(|bars| analyze(code, exchange, &bars, config));

            match &result {
                Ok(a) => tracing::info!(
                    code = %code,
                    bars = a.len(),
                    entries = a.entry_count(),
                    exits = a.exit_count(),
                    "signals computed"
                ),
                Err(e) => tracing::warn!(code = %code, error = %e, "skipping instrument"),
            }

            CodeOutcome {
                code: code.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::make_bars;

    #[test]
    fn empty_series_is_not_an_error() {
        let analysis = analyze("BTC", "BINANCE", &[], &StrategyConfig::default()).unwrap();
        assert!(analysis.is_empty());
        assert!(analysis.signals.is_empty());
    }

    #[test]
    fn non_finite_bar_rejects_series() {
        let mut bars = make_bars(&[1.0, 2.0, 3.0]);
        bars[2].low = f64::NEG_INFINITY;
        let err = analyze("BTC", "BINANCE", &bars, &StrategyConfig::default()).unwrap_err();
        assert!(matches!(err, SkipPumpError::InvalidBar { index: 2, .. }));
    }

    #[test]
    fn counts_match_signals() {
        let bars = make_bars(&[100.0; 10]);
        let analysis = analyze("X", "Y", &bars, &StrategyConfig::default()).unwrap();
        assert_eq!(analysis.len(), 10);
        assert_eq!(analysis.signals.len(), 10);
        assert_eq!(analysis.entry_count(), 0);
        assert_eq!(analysis.exit_count(), 0);
        assert_eq!(analysis.rows().count(), 10);
    }
}
