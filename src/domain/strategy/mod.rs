//! Strategy evaluators and dispatch.
//!
//! [`StrategySpec`] is a closed variant set over the supported strategy
//! kinds, each carrying its resolved parameters. Adding a strategy means
//! adding a variant and a match arm. [`StrategySpec::from_request`] maps a
//! case-insensitive identifier plus optional parameter overrides to a
//! spec; unknown identifiers fail with `InvalidStrategy`.

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod macd;
pub mod bollinger;

use std::fmt;

use crate::domain::error::QuantbackError;
use crate::domain::series::PriceSeries;
use crate::domain::signal::SignalSeries;

pub const DEFAULT_SHORT_WINDOW: usize = 40;
pub const DEFAULT_LONG_WINDOW: usize = 100;
pub const DEFAULT_MACD_SHORT: usize = 12;
pub const DEFAULT_MACD_LONG: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;
pub const DEFAULT_RSI_WINDOW: usize = 14;
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;
pub const DEFAULT_OVERSOLD: f64 = 30.0;
pub const DEFAULT_BOLLINGER_WINDOW: usize = 20;
pub const DEFAULT_NUM_STD_DEV: f64 = 2.0;

/// Optional parameter overrides carried by a backtest request. Absent
/// fields fall back to the per-strategy defaults during dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyParams {
    pub short_window: Option<usize>,
    pub long_window: Option<usize>,
    pub signal_window: Option<usize>,
    pub window: Option<usize>,
    pub overbought: Option<f64>,
    pub oversold: Option<f64>,
    pub num_std_dev: Option<f64>,
}

/// A strategy kind with its resolved parameters.
///
/// Window ordering is deliberately not validated: a short window at or
/// above the long one is accepted and simply yields a strategy that
/// rarely signals.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategySpec {
    SmaCrossover {
        short_window: usize,
        long_window: usize,
    },
    EmaCrossover {
        short_window: usize,
        long_window: usize,
    },
    Rsi {
        window: usize,
        overbought: f64,
        oversold: f64,
    },
    Macd {
        short_window: usize,
        long_window: usize,
        signal_window: usize,
    },
    BollingerBands {
        window: usize,
        num_std_dev: f64,
    },
}

impl StrategySpec {
    /// Resolve a strategy identifier (case-insensitive) and parameter
    /// overrides into a spec.
    pub fn from_request(name: &str, params: &StrategyParams) -> Result<Self, QuantbackError> {
        let ident = name.to_ascii_lowercase();
        match ident.as_str() {
            "sma" => Ok(StrategySpec::SmaCrossover {
                short_window: params.short_window.unwrap_or(DEFAULT_SHORT_WINDOW),
                long_window: params.long_window.unwrap_or(DEFAULT_LONG_WINDOW),
            }),
            "ema" => Ok(StrategySpec::EmaCrossover {
                short_window: params.short_window.unwrap_or(DEFAULT_SHORT_WINDOW),
                long_window: params.long_window.unwrap_or(DEFAULT_LONG_WINDOW),
            }),
            "rsi" => Ok(StrategySpec::Rsi {
                window: params.window.unwrap_or(DEFAULT_RSI_WINDOW),
                overbought: params.overbought.unwrap_or(DEFAULT_OVERBOUGHT),
                oversold: params.oversold.unwrap_or(DEFAULT_OVERSOLD),
            }),
            "macd" => Ok(StrategySpec::Macd {
                short_window: params.short_window.unwrap_or(DEFAULT_MACD_SHORT),
                long_window: params.long_window.unwrap_or(DEFAULT_MACD_LONG),
                signal_window: params.signal_window.unwrap_or(DEFAULT_MACD_SIGNAL),
            }),
            "bollinger_bands" => Ok(StrategySpec::BollingerBands {
                window: params.window.unwrap_or(DEFAULT_BOLLINGER_WINDOW),
                num_std_dev: params.num_std_dev.unwrap_or(DEFAULT_NUM_STD_DEV),
            }),
            _ => Err(QuantbackError::InvalidStrategy {
                name: name.to_string(),
            }),
        }
    }

    /// Run the evaluator for this strategy over a preprocessed price
    /// series.
    pub fn evaluate(&self, prices: &PriceSeries) -> SignalSeries {
        match self {
            StrategySpec::SmaCrossover {
                short_window,
                long_window,
            } => sma::evaluate(prices, *short_window, *long_window),
            StrategySpec::EmaCrossover {
                short_window,
                long_window,
            } => ema::evaluate(prices, *short_window, *long_window),
            StrategySpec::Rsi {
                window,
                overbought,
                oversold,
            } => rsi::evaluate(prices, *window, *overbought, *oversold),
            StrategySpec::Macd {
                short_window,
                long_window,
                signal_window,
            } => macd::evaluate(prices, *short_window, *long_window, *signal_window),
            StrategySpec::BollingerBands {
                window,
                num_std_dev,
            } => bollinger::evaluate(prices, *window, *num_std_dev),
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::SmaCrossover {
                short_window,
                long_window,
            } => write!(f, "SMA({},{})", short_window, long_window),
            StrategySpec::EmaCrossover {
                short_window,
                long_window,
            } => write!(f, "EMA({},{})", short_window, long_window),
            StrategySpec::Rsi {
                window,
                overbought,
                oversold,
            } => write!(f, "RSI({},{},{})", window, overbought, oversold),
            StrategySpec::Macd {
                short_window,
                long_window,
                signal_window,
            } => write!(f, "MACD({},{},{})", short_window, long_window, signal_window),
            StrategySpec::BollingerBands {
                window,
                num_std_dev,
            } => write!(f, "BOLLINGER({},{})", window, num_std_dev),
        }
    }
}
