//! Domain error types.

/// Top-level error type for skippump.
#[derive(Debug, thiserror::Error)]
pub enum SkipPumpError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {code} on {exchange}")]
    NoData { code: String, exchange: String },

    #[error("invalid bar {index} for {code}: {field} is {value}")]
    InvalidBar {
        code: String,
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SkipPumpError {
    pub(crate) fn config_invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        SkipPumpError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&SkipPumpError> for std::process::ExitCode {
    fn from(err: &SkipPumpError) -> Self {
        let code: u8 = match err {
            SkipPumpError::Io(_) => 1,
            SkipPumpError::ConfigParse { .. }
            | SkipPumpError::ConfigMissing { .. }
            | SkipPumpError::ConfigInvalid { .. } => 2,
            SkipPumpError::Data { .. } => 3,
            SkipPumpError::NoData { .. } | SkipPumpError::InvalidBar { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
