//! # Pennyscan Core
//!
//! Domain types, indicator math, and the screening engine for the
//! pennyscan stock screener.
//!
//! ## Overview
//!
//! This crate provides everything the CLI and web frontends share:
//!
//! - **Validated domain models** for symbols, periods, and OHLCV bars
//! - **History source trait** with a Yahoo Finance adapter (live and
//!   deterministic offline modes)
//! - **Indicator math**: RSI(14), trailing average volume, relative
//!   volume, intraday change
//! - **Screening pass**: criteria validation, AND-filtering, and the
//!   sequential fetch-compute-filter loop
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | History provider adapters (Yahoo) |
//! | [`data_source`] | History source trait and source errors |
//! | [`domain`] | Domain models (Bar, BarSeries, Symbol, Period) |
//! | [`error`] | Validation error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`indicators`] | RSI and per-ticker metric computation |
//! | [`screener`] | Criteria, filter, and the screening pass |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pennyscan_core::{screen, Period, ScreenerCriteria, Symbol, YahooHistory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = YahooHistory::default();
//!     let tickers = Symbol::parse_list("SNDL, NOK, ZOM");
//!     let criteria =
//!         ScreenerCriteria::new(tickers.symbols, Period::OneYear, 5.0, 500_000, 70.0)?;
//!
//!     let report = screen(&source, &criteria).await;
//!     for row in &report.results {
//!         println!("{}: ${:.2} rsi {:.1}", row.symbol, row.price, row.rsi);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Criteria construction returns [`ValidationError`]; the screening pass
//! itself is infallible and records per-ticker skips as warnings on the
//! report. Source adapters return structured [`SourceError`] values with
//! stable codes.

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod indicators;
pub mod screener;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::YahooHistory;

// Data source trait and types
pub use data_source::{HistoryRequest, HistorySource, SourceError, SourceErrorKind};

// Domain models
pub use domain::{Bar, BarSeries, Period, Symbol, TickerList, UtcDateTime};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Indicator math
pub use indicators::{compute_metrics, rsi, TickerMetrics, AVG_VOLUME_WINDOW, MIN_BARS, RSI_PERIOD};

// Screening pass
pub use screener::{screen, ScreenReport, ScreenerCriteria};
