#![allow(dead_code)]

use chrono::NaiveDate;
use quantback::domain::error::QuantbackError;
pub use quantback::domain::series::{PricePoint, PriceSeries};
use quantback::ports::data_port::PriceDataPort;
use std::collections::HashMap;

pub struct MockPricePort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_prices(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(symbol.to_string(), points);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl PriceDataPort for MockPricePort {
    fn fetch_prices(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PricePoint>, QuantbackError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(QuantbackError::Data {
                reason: reason.clone(),
            });
        }
        let points = self.data.get(symbol).cloned().unwrap_or_default();
        Ok(points
            .into_iter()
            .filter(|p| {
                start_date.is_none_or(|s| p.date >= s) && end_date.is_none_or(|e| p.date <= e)
            })
            .collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, QuantbackError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Raw points on consecutive days starting 2024-01-01.
pub fn make_points(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            price,
        })
        .collect()
}

/// Preprocessed series built from raw prices (the first row is consumed
/// by return derivation).
pub fn make_series(raw_prices: &[f64]) -> PriceSeries {
    PriceSeries::from_raw(&make_points(raw_prices)).unwrap()
}
