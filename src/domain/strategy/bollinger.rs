//! Bollinger Bands mean-reversion strategy.
//!
//! Long (+1.0) when price closes below the lower band, short (−1.0) when
//! above the upper band, flat otherwise. While the bands are absent both
//! comparisons are false and the signal stays flat.

use crate::domain::indicator::bollinger_bands;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{diff, gt, lt, SignalSeries, StrategyIndicators};

pub fn evaluate(prices: &PriceSeries, window: usize, num_std_dev: f64) -> SignalSeries {
    let (middle, upper_band, lower_band) =
        bollinger_bands(&prices.prices, window, num_std_dev);

    let signal: Vec<f64> = prices
        .prices
        .iter()
        .enumerate()
        .map(|(t, &price)| {
            if lt(Some(price), lower_band[t]) {
                1.0
            } else if gt(Some(price), upper_band[t]) {
                -1.0
            } else {
                0.0
            }
        })
        .collect();

    let positions = diff(&signal);
    SignalSeries {
        dates: prices.dates.clone(),
        price: prices.prices.clone(),
        indicators: StrategyIndicators::Bollinger {
            middle,
            upper_band,
            lower_band,
        },
        signal,
        positions,
    }
}
