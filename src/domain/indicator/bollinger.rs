//! Bollinger Bands indicator.
//!
//! - Middle: rolling mean of close over `window` bars
//! - Upper: middle + num_std_dev · rolling std
//! - Lower: middle − num_std_dev · rolling std
//!
//! The deviation is the sample standard deviation (divides by window-1).
//! All three bands share the warm-up region, except that a window of 1
//! leaves only the upper and lower bands undefined.

use crate::domain::indicator::window::{rolling_mean, rolling_std};
use crate::domain::indicator::IndicatorSeries;
use crate::domain::series::PriceSeries;

#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

pub fn calculate_bollinger(
    series: &PriceSeries,
    window: usize,
    num_std_dev: f64,
) -> BollingerBands {
    let closes = series.closes();
    let dates = series.dates();
    let mean = rolling_mean(&closes, window);
    let std = rolling_std(&closes, window);

    let mut middle = Vec::with_capacity(closes.len());
    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());

    for (m, s) in mean.iter().zip(&std) {
        middle.push(*m);
        match (m, s) {
            (Some(m), Some(s)) => {
                upper.push(Some(m + num_std_dev * s));
                lower.push(Some(m - num_std_dev * s));
            }
            _ => {
                upper.push(None);
                lower.push(None);
            }
        }
    }

    BollingerBands {
        middle: IndicatorSeries::from_values(&dates, middle),
        upper: IndicatorSeries::from_values(&dates, upper),
        lower: IndicatorSeries::from_values(&dates, lower),
    }
}
