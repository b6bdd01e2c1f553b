//! Validated price series.
//!
//! `PriceSeries` is the only input the indicator engine accepts. Construction
//! checks the whole series up front: strictly increasing unique dates, finite
//! price fields, non-negative volume. A series that fails any check is
//! rejected outright — no indicator is worth computing on it.

use crate::domain::error::TickerlensError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PriceSeries {
    bars: Vec<OhlcvBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<OhlcvBar>) -> Result<Self, TickerlensError> {
        for (i, bar) in bars.iter().enumerate() {
            if !bar.prices_finite() {
                return Err(TickerlensError::MalformedSeries {
                    reason: format!("non-finite price in bar {} ({})", i, bar.date),
                });
            }
            if bar.volume < 0 {
                return Err(TickerlensError::MalformedSeries {
                    reason: format!("negative volume in bar {} ({})", i, bar.date),
                });
            }
        }

        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].date == pair[0].date {
                return Err(TickerlensError::MalformedSeries {
                    reason: format!("duplicate date {} at position {}", pair[1].date, i + 1),
                });
            }
            if pair[1].date < pair[0].date {
                return Err(TickerlensError::MalformedSeries {
                    reason: format!(
                        "dates out of order at position {}: {} after {}",
                        i + 1,
                        pair[1].date,
                        pair[0].date
                    ),
                });
            }
        }

        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[OhlcvBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
