//! Price series representation and return preprocessing.
//!
//! A [`PriceSeries`] is built from raw dated closes. Construction derives
//! the simple return column on the raw sequence and drops the first row
//! (its return has no predecessor), so every retained index carries a
//! defined return and all downstream indicator windows operate on the
//! already-shortened series.

use chrono::NaiveDate;

use crate::domain::error::QuantbackError;

/// A single raw observation: date and adjusted close.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Preprocessed price series: dates, prices, and per-index simple returns,
/// all index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    /// `returns[t] = (price[t] - prev) / prev` where `prev` is the raw
    /// predecessor; for index 0 that predecessor is the dropped first row.
    pub returns: Vec<f64>,
}

impl PriceSeries {
    /// Validate raw points (non-empty, strictly increasing dates) and
    /// derive returns, dropping the first row.
    ///
    /// A single raw point yields an empty series: there is no return to
    /// compute, and downstream stages degrade to absent outputs.
    pub fn from_raw(points: &[PricePoint]) -> Result<Self, QuantbackError> {
        if points.is_empty() {
            return Err(QuantbackError::InvalidSeries {
                reason: "price series has no rows".into(),
            });
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(QuantbackError::InvalidSeries {
                    reason: format!(
                        "dates not strictly increasing at {}",
                        pair[1].date
                    ),
                });
            }
        }

        let mut dates = Vec::with_capacity(points.len().saturating_sub(1));
        let mut prices = Vec::with_capacity(points.len().saturating_sub(1));
        let mut returns = Vec::with_capacity(points.len().saturating_sub(1));

        for pair in points.windows(2) {
            dates.push(pair[1].date);
            prices.push(pair[1].price);
            returns.push((pair[1].price - pair[0].price) / pair[0].price);
        }

        Ok(PriceSeries {
            dates,
            prices,
            returns,
        })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
