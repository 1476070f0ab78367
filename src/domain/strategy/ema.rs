//! EMA crossover strategy.
//!
//! Same rule and warm-up gating as the SMA crossover, over exponential
//! averages: long while the short EMA is above the long EMA, flat before
//! index `max(short_window, long_window)`.

use crate::domain::indicator::ema;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{diff, gt, SignalSeries, StrategyIndicators};

pub fn evaluate(prices: &PriceSeries, short_window: usize, long_window: usize) -> SignalSeries {
    let short_ema = ema(&prices.prices, short_window);
    let long_ema = ema(&prices.prices, long_window);

    let start = short_window.max(long_window);
    let mut signal = vec![0.0; prices.len()];
    for t in start..prices.len() {
        if gt(short_ema[t], long_ema[t]) {
            signal[t] = 1.0;
        }
    }

    let positions = diff(&signal);
    SignalSeries {
        dates: prices.dates.clone(),
        price: prices.prices.clone(),
        indicators: StrategyIndicators::EmaCrossover {
            short_ema,
            long_ema,
        },
        signal,
        positions,
    }
}
