//! Simple Moving Average with a shrinking window.
//!
//! `sma[t]` is the mean of the trailing `window` values; indices with
//! fewer than `window` prior values average whatever is available, so the
//! series is defined from index 0.

/// Trailing mean over `window` values, shrinking at the start.
/// A zero window yields an all-absent series.
pub fn sma(series: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; series.len()];
    }

    let mut values = Vec::with_capacity(series.len());
    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(window);
        let slice = &series[start..=i];
        values.push(Some(slice.iter().sum::<f64>() / slice.len() as f64));
    }
    values
}
