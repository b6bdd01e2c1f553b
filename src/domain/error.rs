//! Domain error types.

/// Top-level error type for tickerlens.
#[derive(Debug, thiserror::Error)]
pub enum TickerlensError {
    /// A single indicator request carried an unusable parameter. Local to
    /// that request; siblings in the same batch are unaffected.
    #[error("invalid parameter for {indicator}: {reason}")]
    InvalidParameter { indicator: String, reason: String },

    /// The input series itself is untrustworthy; no indicator may be
    /// computed on it.
    #[error("malformed price series: {reason}")]
    MalformedSeries { reason: String },

    /// An indicator request string could not be understood at the boundary.
    #[error("unrecognized indicator request {input:?}: {reason}")]
    RequestParse { input: String, reason: String },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error("data source error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TickerlensError> for std::process::ExitCode {
    fn from(err: &TickerlensError) -> Self {
        let code: u8 = match err {
            TickerlensError::Io(_) => 1,
            TickerlensError::ConfigParse { .. } | TickerlensError::ConfigInvalid { .. } => 2,
            TickerlensError::Data { .. } | TickerlensError::NoData { .. } => 3,
            TickerlensError::RequestParse { .. } | TickerlensError::InvalidParameter { .. } => 4,
            TickerlensError::MalformedSeries { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
