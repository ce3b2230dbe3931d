//! Bar source port trait.

use crate::domain::error::SkipPumpError;
use crate::domain::ohlcv::OhlcvBar;

pub trait DataPort {
    /// All bars for one instrument, in chronological order.
    fn fetch_ohlcv(&self, code: &str, exchange: &str) -> Result<Vec<OhlcvBar>, SkipPumpError>;

    fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, SkipPumpError>;
}
