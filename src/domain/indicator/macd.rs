//! MACD (Moving Average Convergence/Divergence) indicator.
//!
//! MACD line = ewm(close, fast) − ewm(close, slow)
//! Signal line = ewm(macd_line, signal), seeded by macd_line[0]
//!
//! Both lines inherit the recurrence's no-warm-up property: every position
//! is defined, starting with a MACD line of 0 on the first bar.

use crate::domain::indicator::ewm::ewm;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::series::PriceSeries;

#[derive(Debug, Clone)]
pub struct MacdLines {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
}

pub fn calculate_macd(
    series: &PriceSeries,
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> MacdLines {
    let closes = series.closes();
    let dates = series.dates();

    let ema_fast = ewm(&closes, fast_span);
    let ema_slow = ewm(&closes, slow_span);
    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = ewm(&macd_line, signal_span);

    MacdLines {
        line: IndicatorSeries::from_values(&dates, macd_line.into_iter().map(Some).collect()),
        signal: IndicatorSeries::from_values(&dates, signal_line.into_iter().map(Some).collect()),
    }
}
