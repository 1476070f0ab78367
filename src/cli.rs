//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvPriceAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::QuantbackError;
use crate::domain::performance::PerformanceSummary;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{SignalSeries, StrategyIndicators};
use crate::domain::strategy::{StrategyParams, StrategySpec};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::PriceDataPort;

#[derive(Parser, Debug)]
#[command(name = "quantback", about = "Trading strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest over a CSV price history
    Backtest {
        #[command(flatten)]
        args: BacktestArgs,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Validate a backtest configuration without running it
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct BacktestArgs {
    /// Directory containing {SYMBOL}.csv price files
    #[arg(short, long)]
    pub data: PathBuf,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Symbol to backtest (overrides the config)
    #[arg(long)]
    pub symbol: Option<String>,
    /// Strategy identifier: sma|ema|rsi|macd|bollinger_bands
    #[arg(short, long)]
    pub strategy: Option<String>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub short_window: Option<usize>,
    #[arg(long)]
    pub long_window: Option<usize>,
    #[arg(long)]
    pub signal_window: Option<usize>,
    #[arg(long)]
    pub window: Option<usize>,
    #[arg(long)]
    pub overbought: Option<f64>,
    #[arg(long)]
    pub oversold: Option<f64>,
    #[arg(long)]
    pub num_std_dev: Option<f64>,
    /// Write the signal series as CSV for downstream charting
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// A fully resolved backtest request: flags merged over config values.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestRequest {
    pub symbol: String,
    pub strategy_name: String,
    pub params: StrategyParams,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest { args } => run_backtest(&args),
        Command::ListSymbols { data } => run_list_symbols(&data),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = QuantbackError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_backtest(args: &BacktestArgs) -> ExitCode {
    // Stage 1: Load config, if any
    let config = match &args.config {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(adapter) => Some(adapter),
                Err(code) => return code,
            }
        }
        None => None,
    };

    // Stage 2: Resolve the request (flags take precedence over config)
    let request = match build_request(args, config.as_ref().map(|c| c as &dyn ConfigPort)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Dispatch the strategy before touching any data
    let spec = match StrategySpec::from_request(&request.strategy_name, &request.params) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 4: Fetch and preprocess the price history
    let adapter = CsvPriceAdapter::new(args.data.clone());
    let points = match adapter.fetch_prices(&request.symbol, request.start_date, request.end_date)
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let prices = match PriceSeries::from_raw(&points) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Running backtest: {} with {}, {} rows",
        request.symbol,
        spec,
        prices.len()
    );

    // Stage 5: Evaluate signals and performance
    let signals = spec.evaluate(&prices);
    let summary = PerformanceSummary::compute(&prices, &signals);

    // Stage 6: Console summary
    let transitions = signals.transitions();
    eprintln!("\n=== Results ===");
    eprintln!("Strategy:          {}", spec);
    eprintln!("Transitions:       {}", transitions.len());
    for (date, delta) in &transitions {
        let kind = match *delta {
            d if d >= 2.0 => "reversal: buy",
            d if d > 0.0 => "buy",
            d if d <= -2.0 => "reversal: sell",
            _ => "sell",
        };
        eprintln!("  {}  {:+} ({})", date, delta, kind);
    }
    match summary.cumulative_return {
        Some(value) => {
            eprintln!("Cumulative Return: {:.4} ({:.2}%)", value, value * 100.0)
        }
        None => eprintln!("Cumulative Return: undefined (insufficient data)"),
    }

    // Stage 7: Signal series export
    if let Some(output) = &args.output {
        match write_signal_csv(output, &signals) {
            Ok(()) => eprintln!("\nSignal series written to: {}", output.display()),
            Err(e) => {
                eprintln!("error: failed to write signal series: {e}");
                return (&e).into();
            }
        }
    }

    ExitCode::SUCCESS
}

/// Merge CLI flags over config values into a resolved request.
pub fn build_request(
    args: &BacktestArgs,
    config: Option<&dyn ConfigPort>,
) -> Result<BacktestRequest, QuantbackError> {
    let symbol = args
        .symbol
        .clone()
        .or_else(|| config.and_then(|c| c.get_string("backtest", "symbol")))
        .ok_or_else(|| QuantbackError::ConfigMissing {
            section: "backtest".into(),
            key: "symbol".into(),
        })?;

    let strategy_name = args
        .strategy
        .clone()
        .or_else(|| config.and_then(|c| c.get_string("strategy", "name")))
        .ok_or_else(|| QuantbackError::ConfigMissing {
            section: "strategy".into(),
            key: "name".into(),
        })?;

    let params = StrategyParams {
        short_window: args
            .short_window
            .or_else(|| config_window(config, "short_window")),
        long_window: args
            .long_window
            .or_else(|| config_window(config, "long_window")),
        signal_window: args
            .signal_window
            .or_else(|| config_window(config, "signal_window")),
        window: args.window.or_else(|| config_window(config, "window")),
        overbought: args
            .overbought
            .or_else(|| config.and_then(|c| c.get_double("strategy", "overbought"))),
        oversold: args
            .oversold
            .or_else(|| config.and_then(|c| c.get_double("strategy", "oversold"))),
        num_std_dev: args
            .num_std_dev
            .or_else(|| config.and_then(|c| c.get_double("strategy", "num_std_dev"))),
    };

    let start_date = match args.start_date {
        Some(d) => Some(d),
        None => config_date(config, "start_date")?,
    };
    let end_date = match args.end_date {
        Some(d) => Some(d),
        None => config_date(config, "end_date")?,
    };

    Ok(BacktestRequest {
        symbol,
        strategy_name,
        params,
        start_date,
        end_date,
    })
}

fn config_window(config: Option<&dyn ConfigPort>, key: &str) -> Option<usize> {
    config
        .and_then(|c| c.get_int("strategy", key))
        .and_then(|v| usize::try_from(v).ok())
}

fn config_date(
    config: Option<&dyn ConfigPort>,
    key: &str,
) -> Result<Option<NaiveDate>, QuantbackError> {
    let Some(value) = config.and_then(|c| c.get_string("backtest", key)) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| QuantbackError::ConfigInvalid {
            section: "backtest".into(),
            key: key.into(),
            reason: "invalid date format (expected YYYY-MM-DD)".into(),
        })
}

/// Write a signal series as CSV: date, price, the strategy's indicator
/// columns, signal, and positions. Absent values are empty fields.
pub fn write_signal_csv(path: &PathBuf, signals: &SignalSeries) -> Result<(), QuantbackError> {
    let (names, columns): (Vec<&str>, Vec<&Vec<Option<f64>>>) = match &signals.indicators {
        StrategyIndicators::SmaCrossover {
            short_mavg,
            long_mavg,
        } => (vec!["short_mavg", "long_mavg"], vec![short_mavg, long_mavg]),
        StrategyIndicators::EmaCrossover { short_ema, long_ema } => {
            (vec!["short_ema", "long_ema"], vec![short_ema, long_ema])
        }
        StrategyIndicators::Rsi { rsi } => (vec!["rsi"], vec![rsi]),
        StrategyIndicators::Macd {
            macd_line,
            macd_signal_line,
        } => (
            vec!["macd_line", "macd_signal_line"],
            vec![macd_line, macd_signal_line],
        ),
        StrategyIndicators::Bollinger {
            middle,
            upper_band,
            lower_band,
        } => (
            vec!["middle", "upper_band", "lower_band"],
            vec![middle, upper_band, lower_band],
        ),
    };

    let mut wtr = csv::Writer::from_path(path).map_err(|e| QuantbackError::Data {
        reason: format!("failed to open {}: {}", path.display(), e),
    })?;

    let mut header = vec!["date", "price"];
    header.extend(&names);
    header.extend(["signal", "positions"]);
    wtr.write_record(&header).map_err(|e| QuantbackError::Data {
        reason: format!("CSV write error: {}", e),
    })?;

    for t in 0..signals.len() {
        let mut record = vec![
            signals.dates[t].to_string(),
            signals.price[t].to_string(),
        ];
        for column in &columns {
            record.push(fmt_opt(column[t]));
        }
        record.push(signals.signal[t].to_string());
        record.push(fmt_opt(signals.positions[t]));
        wtr.write_record(&record).map_err(|e| QuantbackError::Data {
            reason: format!("CSV write error: {}", e),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn run_list_symbols(data: &PathBuf) -> ExitCode {
    let adapter = CsvPriceAdapter::new(data.clone());
    match adapter.list_symbols() {
        Ok(symbols) => {
            if symbols.is_empty() {
                eprintln!("No symbols found in {}", data.display());
            } else {
                for symbol in &symbols {
                    println!("{}", symbol);
                }
                eprintln!("{} symbols found", symbols.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let args = BacktestArgs::default();
    let request = match build_request(&args, Some(&config as &dyn ConfigPort)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let spec = match StrategySpec::from_request(&request.strategy_name, &request.params) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nResolved request:");
    eprintln!("  symbol:   {}", request.symbol);
    eprintln!("  strategy: {}", spec);
    if let Some(start) = request.start_date {
        eprintln!("  start:    {}", start);
    }
    if let Some(end) = request.end_date {
        eprintln!("  end:      {}", end);
    }

    eprintln!("\nConfig is valid");
    ExitCode::SUCCESS
}
