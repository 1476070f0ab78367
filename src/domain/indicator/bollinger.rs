//! Bollinger Bands.
//!
//! `middle` is the shrinking-window SMA, defined from index 0. The band
//! half-width is `k` × trailing-window *sample* standard deviation
//! (divides by n−1), which requires a full window; `upper`/`lower` are
//! absent before then, and always absent for windows smaller than 2.

use crate::domain::indicator::sma;

/// Returns `(middle, upper, lower)`, aligned with the input.
pub fn bollinger_bands(
    series: &[f64],
    window: usize,
    num_std_dev: f64,
) -> (Vec<Option<f64>>, Vec<Option<f64>>, Vec<Option<f64>>) {
    let middle = sma(series, window);
    let mut upper = vec![None; series.len()];
    let mut lower = vec![None; series.len()];

    if window >= 2 {
        for t in (window - 1)..series.len() {
            let slice = &series[t + 1 - window..=t];
            let mean = slice.iter().sum::<f64>() / window as f64;
            let variance = slice
                .iter()
                .map(|x| {
                    let d = x - mean;
                    d * d
                })
                .sum::<f64>()
                / (window - 1) as f64;
            let half_width = num_std_dev * variance.sqrt();

            // middle is defined here: the shrinking window is full by now
            let mid = middle[t].unwrap_or(mean);
            upper[t] = Some(mid + half_width);
            lower[t] = Some(mid - half_width);
        }
    }

    (middle, upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_band_warmup() {
        let series = [10.0, 20.0, 30.0, 40.0, 50.0];
        let (middle, upper, lower) = bollinger_bands(&series, 3, 2.0);

        assert!(middle[0].is_some());
        assert_eq!(upper[0], None);
        assert_eq!(upper[1], None);
        assert!(upper[2].is_some());
        assert!(lower[2].is_some());
    }

    #[test]
    fn bollinger_constant_series_collapses() {
        let series = [100.0; 5];
        let (middle, upper, lower) = bollinger_bands(&series, 3, 2.0);

        assert_eq!(middle[4], Some(100.0));
        assert_eq!(upper[4], Some(100.0));
        assert_eq!(lower[4], Some(100.0));
    }

    #[test]
    fn bollinger_known_values() {
        let series = [10.0, 20.0, 30.0];
        let (middle, upper, lower) = bollinger_bands(&series, 3, 2.0);

        let mean = 20.0;
        let variance: f64 = (100.0 + 0.0 + 100.0) / 2.0;
        let half = 2.0 * variance.sqrt();

        assert_eq!(middle[2], Some(mean));
        assert!((upper[2].unwrap() - (mean + half)).abs() < 1e-12);
        assert!((lower[2].unwrap() - (mean - half)).abs() < 1e-12);
    }

    #[test]
    fn bollinger_width_is_twice_k_std() {
        let series: Vec<f64> = (0..25)
            .map(|i| 100.0 + ((i * 3) % 11) as f64)
            .collect();
        let k = 2.0;
        let (_, upper, lower) = bollinger_bands(&series, 5, k);

        for t in 4..series.len() {
            let slice = &series[t - 4..=t];
            let mean = slice.iter().sum::<f64>() / 5.0;
            let std = (slice.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / 4.0).sqrt();
            let width = upper[t].unwrap() - lower[t].unwrap();
            assert!((width - 2.0 * k * std).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_window_1_has_no_bands() {
        let series = [10.0, 20.0, 30.0];
        let (middle, upper, lower) = bollinger_bands(&series, 1, 2.0);

        assert!(middle.iter().all(|v| v.is_some()));
        assert!(upper.iter().all(|v| v.is_none()));
        assert!(lower.iter().all(|v| v.is_none()));
    }

    #[test]
    fn bollinger_symmetry() {
        let series = [10.0, 20.0, 30.0, 25.0, 15.0];
        let (middle, upper, lower) = bollinger_bands(&series, 3, 2.0);

        for t in 2..series.len() {
            let up = upper[t].unwrap() - middle[t].unwrap();
            let down = middle[t].unwrap() - lower[t].unwrap();
            assert!((up - down).abs() < 1e-12);
        }
    }
}
