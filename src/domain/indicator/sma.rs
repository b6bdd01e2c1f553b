//! Simple Moving Average indicator.
//!
//! SMA(window) = rolling mean of close over `window` bars.
//! Warmup: first (window-1) positions are undefined.

use crate::domain::indicator::window::rolling_mean;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::series::PriceSeries;

pub fn calculate_sma(series: &PriceSeries, window: usize) -> IndicatorSeries {
    let values = rolling_mean(&series.closes(), window);
    IndicatorSeries::from_values(&series.dates(), values)
}
