//! MACD (Moving Average Convergence Divergence).
//!
//! `macd_line = ema(series, short) − ema(series, long)`.
//! `signal_line` is a full-window rolling mean of the MACD line (not an
//! EMA of it), absent until `signal_window` MACD values exist.

use crate::domain::indicator::ema;

/// Returns `(macd_line, signal_line)`, both aligned with the input.
pub fn macd(
    series: &[f64],
    short_window: usize,
    long_window: usize,
    signal_window: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let short_ema = ema(series, short_window);
    let long_ema = ema(series, long_window);

    let macd_line: Vec<Option<f64>> = short_ema
        .iter()
        .zip(long_ema.iter())
        .map(|(s, l)| match (s, l) {
            (Some(s), Some(l)) => Some(s - l),
            _ => None,
        })
        .collect();

    let signal_line = rolling_mean(&macd_line, signal_window);
    (macd_line, signal_line)
}

/// Full-window rolling mean over an optional series: absent until the
/// trailing window holds `window` defined values.
fn rolling_mean(series: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut values = vec![None; series.len()];
    if window == 0 {
        return values;
    }

    for t in (window - 1)..series.len() {
        let slice = &series[t + 1 - window..=t];
        if slice.iter().all(|v| v.is_some()) {
            let sum: f64 = slice.iter().flatten().sum();
            values[t] = Some(sum / window as f64);
        }
    }
    values
}
