//! Session-scoped memoization of fetched bars.
//!
//! Wraps any `DataPort` with a (symbol, start, end) → bars cache so that
//! repeated renders of the same view hit the underlying source once.
//! Pass-through for `list_symbols` and `data_range`.

use crate::domain::error::TickerlensError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;

type CacheKey = (String, NaiveDate, NaiveDate);

pub struct MemoizingDataPort<P: DataPort> {
    inner: P,
    cache: RefCell<HashMap<CacheKey, Vec<OhlcvBar>>>,
}

impl<P: DataPort> MemoizingDataPort<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_ranges(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<P: DataPort> DataPort for MemoizingDataPort<P> {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, TickerlensError> {
        let key = (symbol.to_string(), start_date, end_date);
        if let Some(bars) = self.cache.borrow().get(&key) {
            return Ok(bars.clone());
        }

        // Errors are not cached; a retry should hit the source again.
        let bars = self.inner.fetch_ohlcv(symbol, start_date, end_date)?;
        self.cache.borrow_mut().insert(key, bars.clone());
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, TickerlensError> {
        self.inner.list_symbols()
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TickerlensError> {
        self.inner.data_range(symbol)
    }
}
