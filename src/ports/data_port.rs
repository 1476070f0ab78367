//! Price data access port trait.
//!
//! Fetching the raw price history is a collaborator's responsibility and
//! completes before the engine runs; implementations return raw points
//! for [`crate::domain::series::PriceSeries::from_raw`] to validate.

use chrono::NaiveDate;

use crate::domain::error::QuantbackError;
use crate::domain::series::PricePoint;

pub trait PriceDataPort {
    /// Dated adjusted closes for `symbol` within `[start_date, end_date]`,
    /// sorted ascending.
    fn fetch_prices(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PricePoint>, QuantbackError>;

    fn list_symbols(&self) -> Result<Vec<String>, QuantbackError>;
}
