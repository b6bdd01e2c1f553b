//! Request dispatch.
//!
//! A batch of `IndicatorRequest`s is computed against one validated
//! `PriceSeries`. The batch is order-insensitive and duplicates collapse.
//! Each request is validated and computed on its own: a request with a bad
//! parameter lands in `rejected` with its error while its siblings still
//! run. Series-level problems never reach this point — `PriceSeries`
//! construction already rejected them.

use crate::domain::error::TickerlensError;
use crate::domain::indicator::bollinger::calculate_bollinger;
use crate::domain::indicator::ema::calculate_ema;
use crate::domain::indicator::macd::calculate_macd;
use crate::domain::indicator::rsi::calculate_rsi;
use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::{IndicatorRequest, IndicatorSeries};
use crate::domain::series::PriceSeries;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct RejectedRequest {
    pub request: IndicatorRequest,
    pub error: TickerlensError,
}

/// Union of the named output series of every accepted request, plus the
/// requests that were turned away. `rejected` being non-empty is the
/// difference between a partial result and one disguised as complete.
#[derive(Debug, Default)]
pub struct IndicatorReport {
    pub series: BTreeMap<String, IndicatorSeries>,
    pub rejected: Vec<RejectedRequest>,
}

impl IndicatorReport {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub fn compute_indicators(
    series: &PriceSeries,
    requests: &[IndicatorRequest],
) -> IndicatorReport {
    let mut report = IndicatorReport::default();
    let mut seen: Vec<IndicatorRequest> = Vec::new();

    for &request in requests {
        if seen.contains(&request) {
            continue;
        }
        seen.push(request);

        if let Err(error) = request.validate() {
            report.rejected.push(RejectedRequest { request, error });
            continue;
        }

        let names = request.output_names();
        let outputs: Vec<IndicatorSeries> = match request {
            IndicatorRequest::Sma { window } => vec![calculate_sma(series, window)],
            IndicatorRequest::Ema { span } => vec![calculate_ema(series, span)],
            IndicatorRequest::BollingerBands {
                window,
                num_std_dev,
            } => {
                let bands = calculate_bollinger(series, window, num_std_dev);
                vec![bands.middle, bands.upper, bands.lower]
            }
            IndicatorRequest::Rsi { window } => vec![calculate_rsi(series, window)],
            IndicatorRequest::Macd {
                fast_span,
                slow_span,
                signal_span,
            } => {
                let lines = calculate_macd(series, fast_span, slow_span, signal_span);
                vec![lines.line, lines.signal]
            }
        };

        debug_assert_eq!(names.len(), outputs.len());
        for (name, output) in names.into_iter().zip(outputs) {
            report.series.insert(name, output);
        }
    }

    report
}
