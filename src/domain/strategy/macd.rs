//! MACD crossover strategy.
//!
//! Long (1.0) while the MACD line is above its signal line, flat
//! otherwise. The decision column is separate from the indicator's
//! signal line by construction. While the signal line is absent the
//! comparison is false and the strategy stays flat.

use crate::domain::indicator;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{diff, gt, SignalSeries, StrategyIndicators};

pub fn evaluate(
    prices: &PriceSeries,
    short_window: usize,
    long_window: usize,
    signal_window: usize,
) -> SignalSeries {
    let (macd_line, macd_signal_line) =
        indicator::macd(&prices.prices, short_window, long_window, signal_window);

    let signal: Vec<f64> = macd_line
        .iter()
        .zip(macd_signal_line.iter())
        .map(|(&m, &s)| if gt(m, s) { 1.0 } else { 0.0 })
        .collect();

    let positions = diff(&signal);
    SignalSeries {
        dates: prices.dates.clone(),
        price: prices.prices.clone(),
        indicators: StrategyIndicators::Macd {
            macd_line,
            macd_signal_line,
        },
        signal,
        positions,
    }
}
