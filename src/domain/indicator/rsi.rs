//! RSI (Relative Strength Index).
//!
//! Average gain and loss are plain trailing means over the last `window`
//! price changes (not Wilder smoothing):
//! `rs = avg_gain / avg_loss`, `rsi = 100 − 100/(1 + rs)`.
//!
//! Absent for indices with fewer than `window` prior changes. When
//! `avg_loss` is 0 the value saturates to exactly 100; when both averages
//! are 0 (flat window) the value is absent.

/// RSI over trailing `window` price changes.
pub fn rsi(series: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut values = vec![None; series.len()];
    if window == 0 {
        return values;
    }

    for t in window..series.len() {
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for j in (t + 1 - window)..=t {
            let change = series[j] - series[j - 1];
            if change > 0.0 {
                gain_sum += change;
            } else {
                loss_sum -= change;
            }
        }

        let avg_gain = gain_sum / window as f64;
        let avg_loss = loss_sum / window as f64;

        values[t] = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                None
            } else {
                Some(100.0)
            }
        } else {
            Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
        };
    }
    values
}
