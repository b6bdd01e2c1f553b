//! Latest-quote summary for the dashboard header.

use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

/// The metrics row: last close, change against the previous close, volume,
/// and the day's high/low. Needs at least two bars for the change fields.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub symbol: String,
    pub date: NaiveDate,
    pub last_close: f64,
    pub change: Option<f64>,
    pub pct_change: Option<f64>,
    pub volume: i64,
    pub high: f64,
    pub low: f64,
}

impl QuoteSummary {
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        let last = series.bars().last()?;
        let prev = series.len().checked_sub(2).map(|i| &series.bars()[i]);

        let change = prev.map(|p| last.close - p.close);
        let pct_change = prev.and_then(|p| {
            if p.close == 0.0 {
                None
            } else {
                Some((last.close - p.close) / p.close * 100.0)
            }
        });

        Some(Self {
            symbol: last.symbol.clone(),
            date: last.date,
            last_close: last.close,
            change,
            pct_change,
            volume: last.volume,
            high: last.high,
            low: last.low,
        })
    }
}
