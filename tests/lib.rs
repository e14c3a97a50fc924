//! Shared fixtures for pennyscan behavioral tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use pennyscan_core::{
    Bar, BarSeries, HistoryRequest, HistorySource, Period, SourceError, Symbol, UtcDateTime,
};

/// Build a daily bar with explicit open/close at day `index`.
pub fn bar_at(index: usize, open: f64, close: f64, volume: u64) -> Bar {
    let base = UtcDateTime::parse("2024-01-01T00:00:00Z")
        .expect("base timestamp")
        .into_inner();
    let ts = UtcDateTime::from_offset_datetime(base + time::Duration::days(index as i64))
        .expect("bar timestamp");

    let high = open.max(close) + 0.01;
    let low = (open.min(close) - 0.01).max(0.0);
    Bar::new(ts, open, high, low, close, volume).expect("test bar must validate")
}

/// Series of flat-intraday bars (open == close) for a symbol.
pub fn flat_series(symbol: &str, closes: &[f64], volumes: &[u64]) -> BarSeries {
    assert_eq!(closes.len(), volumes.len(), "closes/volumes must align");
    let bars = closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(index, (&close, &volume))| bar_at(index, close, close, volume))
        .collect();
    series_from(symbol, bars)
}

pub fn series_from(symbol: &str, bars: Vec<Bar>) -> BarSeries {
    let symbol = Symbol::parse(symbol).expect("test symbol");
    BarSeries::new(symbol, Period::OneYear, bars)
}

/// In-memory history source with preset per-symbol series.
///
/// Symbols without an entry fail with an unavailable error, matching how
/// the screening pass sees a dead upstream.
#[derive(Default)]
pub struct StaticHistory {
    series: HashMap<String, BarSeries>,
}

impl StaticHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.series.insert(series.symbol.as_str().to_owned(), series);
        self
    }
}

impl HistorySource for StaticHistory {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            self.series
                .get(req.symbol.as_str())
                .cloned()
                .ok_or_else(|| {
                    SourceError::unavailable(format!("no data for {}", req.symbol))
                })
        })
    }
}
