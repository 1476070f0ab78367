//! Performance evaluation: signal series → realized cumulative return.
//!
//! The portfolio return applies a one-step execution lag: the position
//! delta generated at `t−1` is held against the realized return at `t`.
//! The running product skips absent terms and its output is absent
//! exactly where the input term is absent, so compounding proceeds
//! normally from the first defined term.

use crate::domain::series::PriceSeries;
use crate::domain::signal::SignalSeries;

/// Return-based summary of a backtest.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    /// Compounded return of following the lagged signal over the whole
    /// series. Absent for series of fewer than 2 points, or when no
    /// portfolio term is defined.
    pub cumulative_return: Option<f64>,
}

impl PerformanceSummary {
    /// Compute the summary for a signal series over the price series it
    /// was derived from. Both are index-aligned by construction; the
    /// zipped common prefix is evaluated.
    pub fn compute(prices: &PriceSeries, signals: &SignalSeries) -> Self {
        let len = prices.len().min(signals.len());
        if len < 2 {
            return PerformanceSummary {
                cumulative_return: None,
            };
        }

        let mut product = 1.0;
        let mut cumulative: Option<f64> = None;
        for t in 0..len {
            // positions[t-1] × return[t]; absent at t = 0 and while the
            // position delta has no predecessor
            let term = if t == 0 {
                None
            } else {
                signals.positions[t - 1].map(|delta| delta * prices.returns[t])
            };

            cumulative = match term {
                Some(r) => {
                    product *= 1.0 + r;
                    Some(product - 1.0)
                }
                None => None,
            };
        }

        PerformanceSummary {
            cumulative_return: cumulative,
        }
    }
}
