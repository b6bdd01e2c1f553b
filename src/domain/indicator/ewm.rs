//! Exponentially weighted recurrence.
//!
//! out[0] = values[0], out[i] = α·values[i] + (1−α)·out[i−1] with
//! α = 2/(span+1). Strict left-to-right, defined from index 0 — there is no
//! warm-up gap, which is why EMA and MACD return plain `f64` series.

/// Exponentially weighted moving average seeded by the first observation.
pub fn ewm(values: &[f64], span: usize) -> Vec<f64> {
    debug_assert!(span >= 1, "span validated at the request boundary");
    let mut out = Vec::with_capacity(values.len());
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut prev = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(prev);

    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}
