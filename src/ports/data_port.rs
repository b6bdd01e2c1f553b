//! Data access port trait.

use crate::domain::error::TickerlensError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

/// Supplier of historical OHLCV bars. Implementations own fetch, retry and
/// caching concerns; the indicator engine only ever sees the resulting bars.
pub trait DataPort {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, TickerlensError>;

    fn list_symbols(&self) -> Result<Vec<String>, TickerlensError>;

    /// (first date, last date, bar count) for a symbol, if any data exists.
    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TickerlensError>;
}
