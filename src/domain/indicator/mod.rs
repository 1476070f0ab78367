//! Technical indicator implementations.
//!
//! All indicators are pure functions over a price slice, returning a
//! `Vec<Option<f64>>` aligned index-for-index with the input. `None` marks
//! a warm-up index where the indicator lacks enough history. SMA and EMA
//! are defined from index 0 (shrinking window / recursive seed); RSI, the
//! MACD signal line, and Bollinger band widths require a full window.
//!
//! Numeric edge cases (zero variance, zero average loss) resolve to a
//! boundary value or `None`, never a panic.

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod macd;
pub mod bollinger;

pub use bollinger::bollinger_bands;
pub use ema::ema;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::sma;
