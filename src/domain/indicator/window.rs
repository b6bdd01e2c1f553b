//! Rolling-window statistics.
//!
//! Position i is defined iff i >= window-1; the warm-up region is `None`,
//! never a partial-window approximation. A window of 0 or one larger than the
//! input degrades to an all-undefined series rather than an error.
//!
//! Standard deviation is the sample deviation (divides by window-1), so a
//! window below 2 leaves `rolling_std` entirely undefined.

/// Arithmetic mean of the trailing `window` values at each position.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return out;
    }

    for i in (window - 1)..values.len() {
        let start = i + 1 - window;
        let sum: f64 = values[start..=i].iter().sum();
        out[i] = Some(sum / window as f64);
    }
    out
}

/// Sample standard deviation of the trailing `window` values at each position.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window < 2 || window > values.len() {
        return out;
    }

    for i in (window - 1)..values.len() {
        let start = i + 1 - window;
        let slice = &values[start..=i];
        let mean: f64 = slice.iter().sum::<f64>() / window as f64;
        let sum_sq: f64 = slice
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum();
        out[i] = Some((sum_sq / (window - 1) as f64).sqrt());
    }
    out
}
