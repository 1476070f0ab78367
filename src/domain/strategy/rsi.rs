//! RSI threshold strategy.
//!
//! Short (−1.0) when RSI is above the overbought threshold, long (+1.0)
//! when below the oversold threshold, flat otherwise. Evaluated at every
//! index; where RSI is absent both comparisons are false and the signal
//! stays flat.

use crate::domain::indicator;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{diff, gt, lt, SignalSeries, StrategyIndicators};

pub fn evaluate(
    prices: &PriceSeries,
    window: usize,
    overbought: f64,
    oversold: f64,
) -> SignalSeries {
    let rsi = indicator::rsi(&prices.prices, window);

    let signal: Vec<f64> = rsi
        .iter()
        .map(|&r| {
            if gt(r, Some(overbought)) {
                -1.0
            } else if lt(r, Some(oversold)) {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    let positions = diff(&signal);
    SignalSeries {
        dates: prices.dates.clone(),
        price: prices.prices.clone(),
        indicators: StrategyIndicators::Rsi { rsi },
        signal,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use chrono::NaiveDate;

    fn make_series(prices: &[f64]) -> PriceSeries {
        let mut raw = vec![PricePoint {
            date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            price: prices[0],
        }];
        raw.extend(prices.iter().enumerate().map(|(i, &price)| PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Duration::days(i as i64),
            price,
        }));
        PriceSeries::from_raw(&raw).unwrap()
    }

    #[test]
    fn flat_while_rsi_absent() {
        let series = make_series(&[100.0, 101.0, 102.0, 101.0, 100.0]);
        let signals = evaluate(&series, 14, 70.0, 30.0);

        assert!(signals.signal.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn shorts_overbought_series() {
        // monotonically rising: RSI saturates at 100 once defined
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let series = make_series(&prices);
        let signals = evaluate(&series, 5, 70.0, 30.0);

        for t in 5..signals.len() {
            assert_eq!(signals.signal[t], -1.0, "index {}", t);
        }
    }

    #[test]
    fn longs_oversold_series() {
        let prices: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let series = make_series(&prices);
        let signals = evaluate(&series, 5, 70.0, 30.0);

        for t in 5..signals.len() {
            assert_eq!(signals.signal[t], 1.0, "index {}", t);
        }
    }

    #[test]
    fn first_transition_marks_entry() {
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let series = make_series(&prices);
        let signals = evaluate(&series, 5, 70.0, 30.0);

        assert_eq!(signals.positions[5], Some(-1.0));
        assert_eq!(signals.positions[6], Some(0.0));
    }

    #[test]
    fn thresholds_are_exclusive() {
        // RSI exactly at a threshold stays flat: rules use strict comparisons
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let series = make_series(&prices);
        let signals = evaluate(&series, 5, 100.0, 0.0);

        assert!(signals.signal.iter().all(|&s| s == 0.0));
    }
}
