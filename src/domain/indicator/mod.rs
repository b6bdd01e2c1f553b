//! Technical indicator types and transforms.
//!
//! This module provides the types shared by every indicator:
//! - `IndicatorPoint`: one (date, value) pair; `None` marks the warm-up /
//!   undefined region
//! - `IndicatorSeries`: a series of points, always 1:1 with the input bars
//! - `IndicatorRequest`: enum of indicator identity + parameters
//!
//! The transforms themselves live one per file; `engine` dispatches a batch
//! of requests against a single `PriceSeries`.

pub mod window;
pub mod ewm;
pub mod sma;
pub mod ema;
pub mod bollinger;
pub mod rsi;
pub mod macd;
pub mod engine;

use crate::domain::error::TickerlensError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Pair a per-position value vector with the series dates.
    pub fn from_values(dates: &[NaiveDate], values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        let points = dates
            .iter()
            .zip(values)
            .map(|(&date, value)| IndicatorPoint { date, value })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of positions carrying a defined value.
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Value at position `i`; `None` for an undefined position or an index
    /// past the end.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.points.get(i).and_then(|p| p.value)
    }
}

pub const DEFAULT_SMA_WINDOW: usize = 20;
pub const DEFAULT_SMA_SLOW_WINDOW: usize = 50;
pub const DEFAULT_EMA_SPAN: usize = 20;
pub const DEFAULT_BB_WINDOW: usize = 20;
pub const DEFAULT_BB_NUM_STD_DEV: f64 = 2.0;
pub const DEFAULT_RSI_WINDOW: usize = 14;
pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorRequest {
    Sma {
        window: usize,
    },
    Ema {
        span: usize,
    },
    BollingerBands {
        window: usize,
        num_std_dev: f64,
    },
    Rsi {
        window: usize,
    },
    Macd {
        fast_span: usize,
        slow_span: usize,
        signal_span: usize,
    },
}

impl IndicatorRequest {
    /// The indicator set the dashboard offers when nothing is selected.
    pub fn default_set() -> Vec<IndicatorRequest> {
        vec![
            IndicatorRequest::Sma {
                window: DEFAULT_SMA_WINDOW,
            },
            IndicatorRequest::Sma {
                window: DEFAULT_SMA_SLOW_WINDOW,
            },
        ]
    }

    /// Check parameters before dispatch. A failing request is rejected on
    /// its own; siblings in the same batch still run.
    pub fn validate(&self) -> Result<(), TickerlensError> {
        let fail = |reason: &str| {
            Err(TickerlensError::InvalidParameter {
                indicator: self.to_string(),
                reason: reason.into(),
            })
        };
        match *self {
            IndicatorRequest::Sma { window } | IndicatorRequest::Rsi { window } => {
                if window == 0 {
                    return fail("window must be at least 1");
                }
            }
            IndicatorRequest::Ema { span } => {
                if span == 0 {
                    return fail("span must be at least 1");
                }
            }
            IndicatorRequest::BollingerBands {
                window,
                num_std_dev,
            } => {
                if window == 0 {
                    return fail("window must be at least 1");
                }
                if !num_std_dev.is_finite() {
                    return fail("num_std_dev must be finite");
                }
                if num_std_dev < 0.0 {
                    return fail("num_std_dev must not be negative");
                }
            }
            IndicatorRequest::Macd {
                fast_span,
                slow_span,
                signal_span,
            } => {
                if fast_span == 0 || slow_span == 0 || signal_span == 0 {
                    return fail("spans must be at least 1");
                }
            }
        }
        Ok(())
    }

    /// Names of the output series this request produces, in render order.
    /// Every parameter appears in the name, so two distinct requests can
    /// never produce the same name.
    pub fn output_names(&self) -> Vec<String> {
        match *self {
            IndicatorRequest::Sma { window } => vec![format!("SMA_{window}")],
            IndicatorRequest::Ema { span } => vec![format!("EMA_{span}")],
            IndicatorRequest::BollingerBands {
                window,
                num_std_dev,
            } => vec![
                format!("BB_{window}_{num_std_dev}_MIDDLE"),
                format!("BB_{window}_{num_std_dev}_UPPER"),
                format!("BB_{window}_{num_std_dev}_LOWER"),
            ],
            IndicatorRequest::Rsi { window } => vec![format!("RSI_{window}")],
            IndicatorRequest::Macd {
                fast_span,
                slow_span,
                signal_span,
            } => vec![
                format!("MACD_{fast_span}_{slow_span}_{signal_span}"),
                format!("MACD_{fast_span}_{slow_span}_{signal_span}_SIGNAL"),
            ],
        }
    }
}

impl fmt::Display for IndicatorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IndicatorRequest::Sma { window } => write!(f, "SMA({})", window),
            IndicatorRequest::Ema { span } => write!(f, "EMA({})", span),
            IndicatorRequest::BollingerBands {
                window,
                num_std_dev,
            } => write!(f, "BOLLINGER({},{})", window, num_std_dev),
            IndicatorRequest::Rsi { window } => write!(f, "RSI({})", window),
            IndicatorRequest::Macd {
                fast_span,
                slow_span,
                signal_span,
            } => write!(f, "MACD({},{},{})", fast_span, slow_span, signal_span),
        }
    }
}

/// Request strings accepted at the boundary: an indicator name, optionally
/// followed by colon-separated parameters. Missing parameters take the
/// dashboard defaults; anything unrecognized is an error, never dropped.
///
/// Examples: `sma`, `sma:50`, `ema:20`, `bb:20:2`, `rsi:14`, `macd:12:26:9`.
impl FromStr for IndicatorRequest {
    type Err = TickerlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: String| TickerlensError::RequestParse {
            input: s.to_string(),
            reason,
        };
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or("").trim().to_lowercase();
        let args: Vec<&str> = parts.map(str::trim).collect();

        let parse_usize = |arg: &str| {
            arg.parse::<usize>()
                .map_err(|_| err(format!("expected an integer, got {:?}", arg)))
        };
        let parse_f64 = |arg: &str| {
            arg.parse::<f64>()
                .map_err(|_| err(format!("expected a number, got {:?}", arg)))
        };

        let max_args = |n: usize| {
            if args.len() > n {
                Err(err(format!(
                    "too many parameters: expected at most {}, got {}",
                    n,
                    args.len()
                )))
            } else {
                Ok(())
            }
        };

        match name.as_str() {
            "sma" => {
                max_args(1)?;
                let window = match args.first() {
                    Some(arg) => parse_usize(arg)?,
                    None => DEFAULT_SMA_WINDOW,
                };
                Ok(IndicatorRequest::Sma { window })
            }
            "ema" => {
                max_args(1)?;
                let span = match args.first() {
                    Some(arg) => parse_usize(arg)?,
                    None => DEFAULT_EMA_SPAN,
                };
                Ok(IndicatorRequest::Ema { span })
            }
            "bb" | "bollinger" => {
                max_args(2)?;
                let window = match args.first() {
                    Some(arg) => parse_usize(arg)?,
                    None => DEFAULT_BB_WINDOW,
                };
                let num_std_dev = match args.get(1) {
                    Some(arg) => parse_f64(arg)?,
                    None => DEFAULT_BB_NUM_STD_DEV,
                };
                Ok(IndicatorRequest::BollingerBands {
                    window,
                    num_std_dev,
                })
            }
            "rsi" => {
                max_args(1)?;
                let window = match args.first() {
                    Some(arg) => parse_usize(arg)?,
                    None => DEFAULT_RSI_WINDOW,
                };
                Ok(IndicatorRequest::Rsi { window })
            }
            "macd" => {
                if !args.is_empty() && args.len() != 3 {
                    return Err(err("macd takes either no parameters or fast:slow:signal".into()));
                }
                if args.is_empty() {
                    Ok(IndicatorRequest::Macd {
                        fast_span: DEFAULT_MACD_FAST,
                        slow_span: DEFAULT_MACD_SLOW,
                        signal_span: DEFAULT_MACD_SIGNAL,
                    })
                } else {
                    Ok(IndicatorRequest::Macd {
                        fast_span: parse_usize(args[0])?,
                        slow_span: parse_usize(args[1])?,
                        signal_span: parse_usize(args[2])?,
                    })
                }
            }
            "" => Err(err("empty request".into())),
            other => Err(err(format!("unknown indicator {:?}", other))),
        }
    }
}
