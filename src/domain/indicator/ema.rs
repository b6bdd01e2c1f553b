//! Exponential Moving Average indicator.
//!
//! α = 2/(span+1), seeded by the first close, then
//! EMA[i] = C[i]·α + EMA[i-1]·(1−α). Defined from the first bar onward —
//! the EMA family has no warm-up gap.

use crate::domain::indicator::ewm::ewm;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::series::PriceSeries;

pub fn calculate_ema(series: &PriceSeries, span: usize) -> IndicatorSeries {
    let values = ewm(&series.closes(), span).into_iter().map(Some).collect();
    IndicatorSeries::from_values(&series.dates(), values)
}
