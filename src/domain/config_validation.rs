//! Configuration loading and validation.
//!
//! Reads `[strategy]` and `[data]` sections through a [`ConfigPort`], applying defaults for
//! absent keys and rejecting present-but-malformed ones.

use crate::domain::error::SkipPumpError;
use crate::domain::strategy::StrategyConfig;
use crate::domain::universe::{parse_codes, Universe};
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

/// Where bars are read from and which instruments to analyse.
#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    pub directory: PathBuf,
    pub universe: Universe,
}

pub fn build_strategy_config(config: &dyn ConfigPort) -> Result<StrategyConfig, SkipPumpError> {
    let defaults = StrategyConfig::default();

    let strategy = StrategyConfig {
        name: config
            .get_string("strategy", "name")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.name),
        ema_short_period: read_period(config, "ema_short_period", defaults.ema_short_period)?,
        ema_medium_period: read_period(config, "ema_medium_period", defaults.ema_medium_period)?,
        ema_long_period: read_period(config, "ema_long_period", defaults.ema_long_period)?,
        band_window: read_period(config, "band_window", defaults.band_window)?,
        band_std_dev: read_number(config, "band_std_dev", defaults.band_std_dev)?,
        entry_band_factor: read_number(config, "entry_band_factor", defaults.entry_band_factor)?,
        exit_band_factor: read_number(config, "exit_band_factor", defaults.exit_band_factor)?,
    };

    strategy.validate()?;
    Ok(strategy)
}

/// Bar file location without an instrument list.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub directory: PathBuf,
    pub exchange: String,
}

/// Read `[data] directory` and `exchange`; `codes` is not consulted.
pub fn build_data_source(
    config: &dyn ConfigPort,
    exchange_override: Option<&str>,
) -> Result<DataSource, SkipPumpError> {
    let directory = config
        .get_string("data", "directory")
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| SkipPumpError::ConfigMissing {
            section: "data".into(),
            key: "directory".into(),
        })?;

    let exchange = match exchange_override {
        Some(e) => e.to_string(),
        None => config
            .get_string("data", "exchange")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| SkipPumpError::ConfigMissing {
                section: "data".into(),
                key: "exchange".into(),
            })?,
    };

    Ok(DataSource {
        directory: PathBuf::from(directory.trim()),
        exchange: exchange.trim().to_string(),
    })
}

pub fn build_data_config(
    config: &dyn ConfigPort,
    code_override: Option<&str>,
    exchange_override: Option<&str>,
) -> Result<DataConfig, SkipPumpError> {
    let source = build_data_source(config, exchange_override)?;

    let codes_str = match code_override {
        Some(c) => c.to_string(),
        None => config
            .get_string("data", "codes")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| SkipPumpError::ConfigMissing {
                section: "data".into(),
                key: "codes".into(),
            })?,
    };
    let codes = parse_codes(&codes_str)
        .map_err(|e| SkipPumpError::config_invalid("data", "codes", e.to_string()))?;

    Ok(DataConfig {
        directory: source.directory,
        universe: Universe {
            codes,
            exchange: source.exchange,
        },
    })
}

fn read_period(config: &dyn ConfigPort, key: &str, default: usize) -> Result<usize, SkipPumpError> {
    match config.get_string("strategy", key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            SkipPumpError::config_invalid(
                "strategy",
                key,
                format!("expected a non-negative integer, got {raw:?}"),
            )
        }),
    }
}

fn read_number(config: &dyn ConfigPort, key: &str, default: f64) -> Result<f64, SkipPumpError> {
    match config.get_string("strategy", key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
            SkipPumpError::config_invalid(
                "strategy",
                key,
                format!("expected a number, got {raw:?}"),
            )
        }),
    }
}
