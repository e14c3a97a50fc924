//! Screening criteria, filter, and the fetch-compute-filter pass.
//!
//! The pass is deliberately sequential and stateless: every invocation
//! re-fetches each ticker's history, recomputes its metrics, and applies
//! the thresholds from scratch. The only output is a [`ScreenReport`];
//! per-ticker failures never abort the run.

use serde::{Deserialize, Serialize};

use crate::data_source::{HistoryRequest, HistorySource};
use crate::indicators::{compute_metrics, TickerMetrics, MIN_BARS};
use crate::{Period, Symbol, UtcDateTime, ValidationError};

/// Immutable screening configuration for one pass.
///
/// Replaces the ambient UI state of ad-hoc screeners: the triggering
/// mechanism (CLI invocation, HTTP request, button press) builds one of
/// these per refresh and hands it to [`screen`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerCriteria {
    pub symbols: Vec<Symbol>,
    pub period: Period,
    pub max_price: f64,
    pub min_volume: u64,
    pub max_rsi: f64,
}

impl ScreenerCriteria {
    pub fn new(
        symbols: Vec<Symbol>,
        period: Period,
        max_price: f64,
        min_volume: u64,
        max_rsi: f64,
    ) -> Result<Self, ValidationError> {
        if symbols.is_empty() {
            return Err(ValidationError::EmptyTickerList);
        }
        if !max_price.is_finite() || max_price <= 0.0 {
            return Err(ValidationError::InvalidMaxPrice { value: max_price });
        }
        if !max_rsi.is_finite() || !(0.0..=100.0).contains(&max_rsi) {
            return Err(ValidationError::MaxRsiOutOfRange { value: max_rsi });
        }

        Ok(Self {
            symbols,
            period,
            max_price,
            min_volume,
            max_rsi,
        })
    }

    /// Pure AND of the three thresholds; there is no OR mode.
    pub fn matches(&self, metrics: &TickerMetrics) -> bool {
        metrics.price <= self.max_price
            && metrics.volume >= self.min_volume
            && metrics.rsi <= self.max_rsi
    }
}

/// Outcome of one screening pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenReport {
    /// Qualifying tickers, in criteria symbol order.
    pub results: Vec<TickerMetrics>,
    /// Soft warnings for tickers that were skipped rather than scored.
    pub warnings: Vec<String>,
    pub generated_at: UtcDateTime,
}

impl ScreenReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Run one fetch-compute-filter pass over the criteria's symbols.
///
/// Symbols are processed strictly in order, one at a time. A failed
/// fetch or a history shorter than [`MIN_BARS`] skips that ticker and
/// records a warning; it never fails the pass.
pub async fn screen(source: &dyn HistorySource, criteria: &ScreenerCriteria) -> ScreenReport {
    let mut results = Vec::new();
    let mut warnings = Vec::new();

    for symbol in &criteria.symbols {
        let request = HistoryRequest::new(symbol.clone(), criteria.period);
        let series = match source.history(request).await {
            Ok(series) => series,
            Err(error) => {
                warnings.push(format!("{symbol}: skipped ({error})"));
                continue;
            }
        };

        let metrics = match compute_metrics(&series) {
            Some(metrics) => metrics,
            None => {
                warnings.push(format!(
                    "{symbol}: insufficient history ({} bars, need {MIN_BARS})",
                    series.len()
                ));
                continue;
            }
        };

        if criteria.matches(&metrics) {
            results.push(metrics);
        }
    }

    ScreenReport {
        results,
        warnings,
        generated_at: UtcDateTime::now(),
    }
}
