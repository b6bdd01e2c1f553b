//! Core domain types and logic.

pub mod ohlcv;
pub mod series;
pub mod indicator;
pub mod snapshot;
pub mod error;
