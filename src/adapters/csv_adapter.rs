//! CSV file price data adapter.
//!
//! Reads `{SYMBOL}.csv` files from a base directory. Expected layout:
//! a header row, then `date,adj_close` records with ISO dates.

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::domain::error::QuantbackError;
use crate::domain::series::PricePoint;
use crate::ports::data_port::PriceDataPort;

pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

impl PriceDataPort for CsvPriceAdapter {
    fn fetch_prices(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PricePoint>, QuantbackError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| QuantbackError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| QuantbackError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| QuantbackError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                QuantbackError::Data {
                    reason: format!("invalid date {}: {}", date_str, e),
                }
            })?;

            if start_date.is_some_and(|start| date < start)
                || end_date.is_some_and(|end| date > end)
            {
                continue;
            }

            let price: f64 = record
                .get(1)
                .ok_or_else(|| QuantbackError::Data {
                    reason: "missing adj_close column".into(),
                })?
                .parse()
                .map_err(|e| QuantbackError::Data {
                    reason: format!("invalid adj_close value: {}", e),
                })?;

            points.push(PricePoint { date, price });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    fn list_symbols(&self) -> Result<Vec<String>, QuantbackError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| QuantbackError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| QuantbackError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
