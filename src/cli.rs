//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::cache_adapter::MemoizingDataPort;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::TickerlensError;
use crate::domain::indicator::engine::{compute_indicators, IndicatorReport};
use crate::domain::indicator::IndicatorRequest;
use crate::domain::series::PriceSeries;
use crate::domain::snapshot::QuoteSummary;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

pub const DEFAULT_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "tickerlens", about = "Stock price history and indicator dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the quote summary and indicator table for a symbol
    Show {
        #[arg(long)]
        symbol: String,
        /// Directory of per-symbol CSV files
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Indicator requests, e.g. sma:20 bb:20:2 macd:12:26:9
        #[arg(short, long, num_args = 1..)]
        indicators: Vec<String>,
        /// Number of most recent rows to print
        #[arg(long)]
        rows: Option<usize>,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the stored date range for a symbol
    Info {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Show {
            symbol,
            data,
            config,
            start,
            end,
            indicators,
            rows,
        } => run_show(
            &symbol,
            data,
            config.as_deref(),
            start,
            end,
            &indicators,
            rows,
        ),
        Command::ListSymbols { data, config } => run_list_symbols(data, config.as_deref()),
        Command::Info {
            symbol,
            data,
            config,
        } => run_info(&symbol, data, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

/// Settings a dashboard config file may provide; every field has a
/// command-line override.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: Option<PathBuf>,
    pub default_indicators: Vec<IndicatorRequest>,
    pub rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_indicators: IndicatorRequest::default_set(),
            rows: DEFAULT_ROWS,
        }
    }
}

impl DashboardConfig {
    pub fn load(config: &dyn ConfigPort) -> Result<Self, TickerlensError> {
        let data_path = config.get_string("data", "path").map(PathBuf::from);

        let default_indicators = match config.get_string("indicators", "default") {
            Some(list) => {
                let specs: Vec<String> = list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                parse_requests(&specs).map_err(|e| TickerlensError::ConfigInvalid {
                    section: "indicators".into(),
                    key: "default".into(),
                    reason: e.to_string(),
                })?
            }
            None => IndicatorRequest::default_set(),
        };

        let rows = config.get_int("show", "rows", DEFAULT_ROWS as i64);
        if rows < 1 {
            return Err(TickerlensError::ConfigInvalid {
                section: "show".into(),
                key: "rows".into(),
                reason: format!("must be at least 1, got {rows}"),
            });
        }

        Ok(Self {
            data_path,
            default_indicators,
            rows: rows as usize,
        })
    }
}

/// Parse request strings from the boundary; the first malformed one is an
/// error naming the offending input.
pub fn parse_requests(specs: &[String]) -> Result<Vec<IndicatorRequest>, TickerlensError> {
    specs.iter().map(|s| s.parse()).collect()
}

fn load_dashboard_config(path: Option<&std::path::Path>) -> Result<DashboardConfig, TickerlensError> {
    match path {
        Some(path) => {
            let adapter =
                FileConfigAdapter::from_file(path).map_err(|e| TickerlensError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            DashboardConfig::load(&adapter)
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn resolve_data_dir(
    flag: Option<PathBuf>,
    config: &DashboardConfig,
) -> Result<PathBuf, TickerlensError> {
    flag.or_else(|| config.data_path.clone())
        .ok_or_else(|| TickerlensError::Data {
            reason: "no data directory: pass --data or set [data] path in the config".into(),
        })
}

fn run_show(
    symbol: &str,
    data: Option<PathBuf>,
    config_path: Option<&std::path::Path>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    indicator_specs: &[String],
    rows: Option<usize>,
) -> Result<(), TickerlensError> {
    let config = load_dashboard_config(config_path)?;
    let data_dir = resolve_data_dir(data, &config)?;
    let adapter = MemoizingDataPort::new(CsvAdapter::new(data_dir));

    let start = start.unwrap_or(NaiveDate::MIN);
    let end = end.unwrap_or(NaiveDate::MAX);
    let bars = adapter.fetch_ohlcv(symbol, start, end)?;
    if bars.is_empty() {
        return Err(TickerlensError::NoData {
            symbol: symbol.to_string(),
        });
    }

    let series = PriceSeries::new(bars)?;
    let requests = if indicator_specs.is_empty() {
        config.default_indicators.clone()
    } else {
        parse_requests(indicator_specs)?
    };

    let report = compute_indicators(&series, &requests);
    for rejected in &report.rejected {
        eprintln!("warning: skipped {}: {}", rejected.request, rejected.error);
    }

    if let Some(summary) = QuoteSummary::from_series(&series) {
        print!("{}", render_summary(&summary));
    }
    println!();
    print!("{}", render_table(&series, &report, rows.unwrap_or(config.rows)));

    Ok(())
}

fn run_list_symbols(
    data: Option<PathBuf>,
    config_path: Option<&std::path::Path>,
) -> Result<(), TickerlensError> {
    let config = load_dashboard_config(config_path)?;
    let adapter = CsvAdapter::new(resolve_data_dir(data, &config)?);
    for symbol in adapter.list_symbols()? {
        println!("{symbol}");
    }
    Ok(())
}

fn run_info(
    symbol: &str,
    data: Option<PathBuf>,
    config_path: Option<&std::path::Path>,
) -> Result<(), TickerlensError> {
    let config = load_dashboard_config(config_path)?;
    let adapter = CsvAdapter::new(resolve_data_dir(data, &config)?);
    match adapter.data_range(symbol)? {
        Some((first, last, count)) => {
            println!("{symbol}: {count} bars from {first} to {last}");
            Ok(())
        }
        None => Err(TickerlensError::NoData {
            symbol: symbol.to_string(),
        }),
    }
}

pub fn render_summary(summary: &QuoteSummary) -> String {
    let change = match (summary.change, summary.pct_change) {
        (Some(change), Some(pct)) => format!("{:+.2} ({:+.2}%)", change, pct),
        (Some(change), None) => format!("{:+.2}", change),
        _ => "n/a".to_string(),
    };
    format!(
        "{} {}  close {:.2}  {}  high {:.2}  low {:.2}  volume {}\n",
        summary.symbol, summary.date, summary.last_close, change, summary.high, summary.low,
        summary.volume
    )
}

/// Plain-text table of the most recent `rows` bars: date, close, then one
/// column per output series in name order. Undefined positions print `-`.
pub fn render_table(series: &PriceSeries, report: &IndicatorReport, rows: usize) -> String {
    const COL: usize = 12;
    let names: Vec<&String> = report.series.keys().collect();

    let mut out = String::new();
    out.push_str(&format!("{:<12}{:>width$}", "DATE", "CLOSE", width = COL));
    for name in &names {
        out.push_str(&format!("{:>width$}", name, width = COL.max(name.len() + 2)));
    }
    out.push('\n');

    let first_row = series.len().saturating_sub(rows);
    for (i, bar) in series.bars().iter().enumerate().skip(first_row) {
        out.push_str(&format!(
            "{:<12}{:>width$.2}",
            bar.date.to_string(),
            bar.close,
            width = COL
        ));
        for name in &names {
            let cell = match report.series[*name].value_at(i) {
                Some(v) => format!("{:.2}", v),
                None => "-".to_string(),
            };
            out.push_str(&format!("{:>width$}", cell, width = COL.max(name.len() + 2)));
        }
        out.push('\n');
    }
    out
}
