//! CLI request-assembly and export tests.
//!
//! Tests cover:
//! - Flag/config merging into a resolved backtest request
//! - Missing and invalid config keys
//! - Signal-series CSV export shape

mod common;

use common::*;
use quantback::adapters::file_config_adapter::FileConfigAdapter;
use quantback::cli::{build_request, write_signal_csv, BacktestArgs};
use quantback::domain::error::QuantbackError;
use quantback::domain::strategy::StrategySpec;
use quantback::ports::config_port::ConfigPort;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn request_resolves_from_config_alone() {
    let file = write_config(
        r#"
[backtest]
symbol = BTC-USD
start_date = 2020-01-01
end_date = 2024-06-27

[strategy]
name = sma
short_window = 2
long_window = 3
"#,
    );
    let config = FileConfigAdapter::from_file(file.path()).unwrap();

    let args = BacktestArgs::default();
    let request = build_request(&args, Some(&config as &dyn ConfigPort)).unwrap();

    assert_eq!(request.symbol, "BTC-USD");
    assert_eq!(request.strategy_name, "sma");
    assert_eq!(request.params.short_window, Some(2));
    assert_eq!(request.params.long_window, Some(3));
    assert_eq!(request.start_date, Some(date(2020, 1, 1)));
    assert_eq!(request.end_date, Some(date(2024, 6, 27)));
}

#[test]
fn flags_take_precedence_over_config() {
    let file = write_config(
        "[backtest]\nsymbol = BTC-USD\n\n[strategy]\nname = sma\nshort_window = 2\n",
    );
    let config = FileConfigAdapter::from_file(file.path()).unwrap();

    let args = BacktestArgs {
        symbol: Some("ETH-USD".into()),
        strategy: Some("ema".into()),
        short_window: Some(5),
        ..Default::default()
    };
    let request = build_request(&args, Some(&config as &dyn ConfigPort)).unwrap();

    assert_eq!(request.symbol, "ETH-USD");
    assert_eq!(request.strategy_name, "ema");
    assert_eq!(request.params.short_window, Some(5));
}

#[test]
fn missing_symbol_is_a_config_error() {
    let file = write_config("[strategy]\nname = sma\n");
    let config = FileConfigAdapter::from_file(file.path()).unwrap();

    let err = build_request(&BacktestArgs::default(), Some(&config as &dyn ConfigPort))
        .unwrap_err();
    assert!(matches!(err, QuantbackError::ConfigMissing { .. }));
}

#[test]
fn missing_strategy_name_is_a_config_error() {
    let file = write_config("[backtest]\nsymbol = BTC-USD\n");
    let config = FileConfigAdapter::from_file(file.path()).unwrap();

    let err = build_request(&BacktestArgs::default(), Some(&config as &dyn ConfigPort))
        .unwrap_err();
    match err {
        QuantbackError::ConfigMissing { section, key } => {
            assert_eq!(section, "strategy");
            assert_eq!(key, "name");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn malformed_config_date_is_rejected() {
    let file = write_config(
        "[backtest]\nsymbol = BTC-USD\nstart_date = 01/01/2020\n\n[strategy]\nname = sma\n",
    );
    let config = FileConfigAdapter::from_file(file.path()).unwrap();

    let err = build_request(&BacktestArgs::default(), Some(&config as &dyn ConfigPort))
        .unwrap_err();
    assert!(matches!(err, QuantbackError::ConfigInvalid { .. }));
}

#[test]
fn request_without_config_uses_flags_only() {
    let args = BacktestArgs {
        symbol: Some("BTC-USD".into()),
        strategy: Some("bollinger_bands".into()),
        window: Some(5),
        num_std_dev: Some(1.0),
        ..Default::default()
    };
    let request = build_request(&args, None).unwrap();

    let spec = StrategySpec::from_request(&request.strategy_name, &request.params).unwrap();
    assert_eq!(
        spec,
        StrategySpec::BollingerBands {
            window: 5,
            num_std_dev: 1.0,
        }
    );
}

#[test]
fn signal_csv_export_has_strategy_columns() {
    let prices = make_series(&[10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0, 11.0, 12.0, 13.0]);
    let spec = StrategySpec::SmaCrossover {
        short_window: 2,
        long_window: 3,
    };
    let signals = spec.evaluate(&prices);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signals.csv");
    write_signal_csv(&path, &signals).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,price,short_mavg,long_mavg,signal,positions"
    );
    // one record per signal row
    assert_eq!(lines.count(), signals.len());

    // the first record carries an empty positions field
    let first = content.lines().nth(1).unwrap();
    assert!(first.ends_with(','), "expected absent positions: {}", first);
}

#[test]
fn signal_csv_export_macd_names_both_lines() {
    let prices = make_series(&[10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0, 11.0, 12.0, 13.0]);
    let spec = StrategySpec::Macd {
        short_window: 3,
        long_window: 6,
        signal_window: 4,
    };
    let signals = spec.evaluate(&prices);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signals.csv");
    write_signal_csv(&path, &signals).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("date,price,macd_line,macd_signal_line,signal,positions"));
}
