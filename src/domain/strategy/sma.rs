//! SMA crossover strategy.
//!
//! Long (1.0) while the short moving average is above the long one, flat
//! (0.0) otherwise. Indices before `max(short_window, long_window)` are
//! forced flat even though the shrinking-window averages exist earlier —
//! warm-up suppression, applied from that index exactly.

use crate::domain::indicator::sma;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{diff, gt, SignalSeries, StrategyIndicators};

pub fn evaluate(prices: &PriceSeries, short_window: usize, long_window: usize) -> SignalSeries {
    let short_mavg = sma(&prices.prices, short_window);
    let long_mavg = sma(&prices.prices, long_window);

    let start = short_window.max(long_window);
    let mut signal = vec![0.0; prices.len()];
    for t in start..prices.len() {
        if gt(short_mavg[t], long_mavg[t]) {
            signal[t] = 1.0;
        }
    }

    let positions = diff(&signal);
    SignalSeries {
        dates: prices.dates.clone(),
        price: prices.prices.clone(),
        indicators: StrategyIndicators::SmaCrossover {
            short_mavg,
            long_mavg,
        },
        signal,
        positions,
    }
}
