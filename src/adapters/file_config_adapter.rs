//! INI file configuration adapter.

use crate::domain::error::SkipPumpError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SkipPumpError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|reason| SkipPumpError::ConfigParse {
                file: path.display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, SkipPumpError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| SkipPumpError::ConfigParse {
                file: "<string>".into(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_validation::{build_data_config, build_strategy_config};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[strategy]
name = Skip Pump 15m
ema_short_period = 21
band_std_dev = 2.0
entry_band_factor = 0.92

[data]
directory = /var/data/bars
exchange = BINANCE
codes = BTCUSDT,ETHUSDT
"#;

    #[test]
    fn from_string_parses_config() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("strategy", "name"),
            Some("Skip Pump 15m".to_string())
        );
        assert_eq!(
            adapter.get_string("data", "codes"),
            Some("BTCUSDT,ETHUSDT".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(adapter.get_string("strategy", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn values_are_returned_verbatim() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("strategy", "entry_band_factor"),
            Some("0.92".to_string())
        );
    }

    #[test]
    fn malformed_ini_is_rejected() {
        let result = FileConfigAdapter::from_string("[strategy\nname = x\n");
        assert!(matches!(result, Err(SkipPumpError::ConfigParse { .. })));
    }

    #[test]
    fn feeds_config_builders() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        let strategy = build_strategy_config(&adapter).unwrap();
        let data = build_data_config(&adapter, None, None).unwrap();

        assert_eq!(strategy.name, "Skip Pump 15m");
        assert_eq!(strategy.ema_medium_period, 55);
        assert_eq!(data.universe.codes, vec!["BTCUSDT", "ETHUSDT"]);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\nexchange = KRAKEN\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("data", "exchange"),
            Some("KRAKEN".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/config.ini");
        assert!(matches!(result, Err(SkipPumpError::ConfigParse { .. })));
    }
}
