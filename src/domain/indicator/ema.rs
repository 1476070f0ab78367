//! Exponential Moving Average.
//!
//! α = 2/(window+1), seeded with the first value:
//! `ema[0] = x[0]`, `ema[t] = α·x[t] + (1−α)·ema[t−1]`.
//! Defined from index 0; there is no warm-up gap.

/// Exponentially weighted mean with span `window`.
/// A zero window yields an all-absent series.
pub fn ema(series: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; series.len()];
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut values = Vec::with_capacity(series.len());
    let mut prev = 0.0;

    for (i, &x) in series.iter().enumerate() {
        prev = if i == 0 {
            x
        } else {
            alpha * x + (1.0 - alpha) * prev
        };
        values.push(Some(prev));
    }
    values
}
