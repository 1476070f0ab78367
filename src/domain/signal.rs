//! Signal series: the strategy evaluator output.
//!
//! A [`SignalSeries`] is aligned index-for-index with the price series it
//! was derived from. Indicator columns are a closed enum of distinctly
//! named fields per strategy — the MACD signal line and the decision
//! signal live in separate fields and cannot collide.

use chrono::NaiveDate;

/// Position state over time plus the indicator columns that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSeries {
    pub dates: Vec<NaiveDate>,
    pub price: Vec<f64>,
    pub indicators: StrategyIndicators,
    /// Desired position state: 1.0 long, −1.0 short, 0.0 flat. Always
    /// defined.
    pub signal: Vec<f64>,
    /// First difference of `signal`: the discrete transition event
    /// (+1 enter, −1 exit, ±2 reversal, 0 hold). Absent at index 0.
    pub positions: Vec<Option<f64>>,
}

/// Strategy-specific indicator columns.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyIndicators {
    SmaCrossover {
        short_mavg: Vec<Option<f64>>,
        long_mavg: Vec<Option<f64>>,
    },
    EmaCrossover {
        short_ema: Vec<Option<f64>>,
        long_ema: Vec<Option<f64>>,
    },
    Rsi {
        rsi: Vec<Option<f64>>,
    },
    Macd {
        macd_line: Vec<Option<f64>>,
        macd_signal_line: Vec<Option<f64>>,
    },
    Bollinger {
        middle: Vec<Option<f64>>,
        upper_band: Vec<Option<f64>>,
        lower_band: Vec<Option<f64>>,
    },
}

impl SignalSeries {
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Non-zero transition events as `(date, position delta)` pairs, the
    /// entry/exit markers a charting collaborator would plot.
    pub fn transitions(&self) -> Vec<(NaiveDate, f64)> {
        self.dates
            .iter()
            .zip(self.positions.iter())
            .filter_map(|(date, delta)| match delta {
                Some(d) if *d != 0.0 => Some((*date, *d)),
                _ => None,
            })
            .collect()
    }
}

/// First difference: absent at index 0, `signal[t] − signal[t−1]` after.
pub fn diff(signal: &[f64]) -> Vec<Option<f64>> {
    signal
        .iter()
        .enumerate()
        .map(|(t, &s)| if t == 0 { None } else { Some(s - signal[t - 1]) })
        .collect()
}

/// `a > b`; false when either side is absent, never a fault.
pub fn gt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x > y)
}

/// `a < b`; false when either side is absent.
pub fn lt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x < y)
}
