//! RSI (Relative Strength Index) indicator.
//!
//! delta[i] = close[i] − close[i−1]; gains and losses are the positive and
//! negative parts of delta; avg_gain and avg_loss are plain rolling means
//! over `window` deltas. RSI = 100 − 100/(1 + avg_gain/avg_loss).
//!
//! The division is guarded explicitly instead of leaning on float ∞/NaN
//! propagation: avg_loss == 0 with gains present → 100, and a window with
//! no movement at all (both averages 0) → 50.
//!
//! Warmup: the first `window` bars are undefined — the delta series loses
//! one position and the rolling mean another window-1.

use crate::domain::indicator::window::rolling_mean;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::series::PriceSeries;

pub fn calculate_rsi(series: &PriceSeries, window: usize) -> IndicatorSeries {
    let closes = series.closes();
    let dates = series.dates();
    let mut out = vec![None; closes.len()];

    if window == 0 || closes.len() < 2 {
        return IndicatorSeries::from_values(&dates, out);
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let avg_gain = rolling_mean(&gains, window);
    let avg_loss = rolling_mean(&losses, window);

    // Index j of the delta series corresponds to bar j+1.
    for (j, (gain, loss)) in avg_gain.iter().zip(&avg_loss).enumerate() {
        if let (Some(gain), Some(loss)) = (gain, loss) {
            out[j + 1] = Some(rsi_value(*gain, *loss));
        }
    }

    IndicatorSeries::from_values(&dates, out)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            // Flat window: neither strength nor weakness.
            50.0
        } else {
            100.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ohlcv::OhlcvBar;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn make_series(prices: &[f64]) -> PriceSeries {
        let bars = prices
            .iter()
            .enumerate()
            .map(|(i, &close)| OhlcvBar {
                symbol: "TEST".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn rsi_warmup_spans_window_bars() {
        let prices: Vec<f64> = (0..8).map(|i| 100.0 + (i % 3) as f64).collect();
        let series = calculate_rsi(&make_series(&prices), 4);
        for i in 0..4 {
            assert_eq!(series.value_at(i), None, "position {i} should be undefined");
        }
        for i in 4..8 {
            assert!(series.value_at(i).is_some(), "position {i} should be defined");
        }
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let series = calculate_rsi(&make_series(&prices), 5);
        for i in 5..10 {
            assert_abs_diff_eq!(series.value_at(i).unwrap(), 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let prices: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let series = calculate_rsi(&make_series(&prices), 5);
        for i in 5..10 {
            assert_abs_diff_eq!(series.value_at(i).unwrap(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn rsi_flat_window_is_50() {
        let series = calculate_rsi(&make_series(&[100.0; 8]), 3);
        for i in 3..8 {
            assert_abs_diff_eq!(series.value_at(i).unwrap(), 50.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn rsi_known_calculation() {
        // Deltas: +2, -1, +3, -2. Window 4: avg_gain = 5/4, avg_loss = 3/4,
        // rs = 5/3, RSI = 100 - 100/(1 + 5/3) = 62.5.
        let series = calculate_rsi(&make_series(&[10.0, 12.0, 11.0, 14.0, 12.0]), 4);
        assert_abs_diff_eq!(series.value_at(4).unwrap(), 62.5, epsilon = 1e-12);
    }

    #[test]
    fn rsi_stays_in_range() {
        let prices: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
            .collect();
        let series = calculate_rsi(&make_series(&prices), 14);
        for point in &series.points {
            if let Some(v) = point.value {
                assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
            }
        }
    }

    #[test]
    fn rsi_short_series_entirely_undefined() {
        let series = calculate_rsi(&make_series(&[100.0, 101.0, 102.0]), 14);
        assert_eq!(series.len(), 3);
        assert_eq!(series.defined_count(), 0);
    }

    #[test]
    fn rsi_single_bar_and_empty() {
        assert_eq!(calculate_rsi(&make_series(&[100.0]), 14).defined_count(), 0);
        assert!(calculate_rsi(&make_series(&[]), 14).is_empty());
    }

    #[test]
    fn rsi_zero_window_entirely_undefined() {
        let series = calculate_rsi(&make_series(&[100.0, 101.0, 102.0]), 0);
        assert_eq!(series.len(), 3);
        assert_eq!(series.defined_count(), 0);
    }
}
