//! CSV file data adapter.
//!
//! One file per symbol (`{SYMBOL}.csv`) in a base directory, with a header
//! row and `date,open,high,low,close,volume` columns, dates as YYYY-MM-DD.

use crate::domain::error::TickerlensError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }

    fn read_bars(&self, symbol: &str) -> Result<Vec<OhlcvBar>, TickerlensError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| TickerlensError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| TickerlensError::Data {
                reason: format!("{}: CSV parse error: {}", path.display(), e),
            })?;
            bars.push(parse_bar(symbol, &record, row + 2)?);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

fn parse_bar(
    symbol: &str,
    record: &StringRecord,
    line: usize,
) -> Result<OhlcvBar, TickerlensError> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| TickerlensError::Data {
                reason: format!("line {}: missing {} column", line, name),
            })
            .map(str::trim)
    };

    let parse_price = |idx: usize, name: &str| -> Result<f64, TickerlensError> {
        field(idx, name)?
            .parse()
            .map_err(|e| TickerlensError::Data {
                reason: format!("line {}: invalid {} value: {}", line, name, e),
            })
    };

    let date = NaiveDate::parse_from_str(field(0, "date")?, "%Y-%m-%d").map_err(|e| {
        TickerlensError::Data {
            reason: format!("line {}: invalid date: {}", line, e),
        }
    })?;

    let volume: i64 = field(5, "volume")?
        .parse()
        .map_err(|e| TickerlensError::Data {
            reason: format!("line {}: invalid volume value: {}", line, e),
        })?;

    Ok(OhlcvBar {
        symbol: symbol.to_string(),
        date,
        open: parse_price(1, "open")?,
        high: parse_price(2, "high")?,
        low: parse_price(3, "low")?,
        close: parse_price(4, "close")?,
        volume,
    })
}

impl DataPort for CsvAdapter {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, TickerlensError> {
        let bars = self
            .read_bars(symbol)?
            .into_iter()
            .filter(|b| b.date >= start_date && b.date <= end_date)
            .collect();
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, TickerlensError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| TickerlensError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TickerlensError::Data {
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

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TickerlensError> {
        if !self.csv_path(symbol).exists() {
            return Ok(None);
        }
        let bars = self.read_bars(symbol)?;
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}
