//! Yahoo Finance daily-history adapter.
//!
//! Live mode hits the unauthenticated chart v8 endpoint; the default
//! offline mode fabricates deterministic penny-range series so the CLI,
//! web UI, and tests behave identically without network access.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::Duration;

use crate::data_source::{HistoryRequest, HistorySource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{Bar, BarSeries, Period, Symbol, UtcDateTime, ValidationError};

/// Yahoo history adapter supporting both real API calls and offline mode.
#[derive(Clone)]
pub struct YahooHistory {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
}

impl Default for YahooHistory {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
        }
    }
}

impl YahooHistory {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
        }
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }

    async fn fetch_real_history(&self, req: &HistoryRequest) -> Result<BarSeries, SourceError> {
        let endpoint = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d",
            urlencoding::encode(req.symbol.as_str()),
            req.period.as_str()
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(10_000);

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        if response.status == 429 {
            return Err(SourceError::rate_limited("yahoo rate limited chart request"));
        }
        if response.status == 404 {
            // Unknown symbols screen as "no data", not as a fault.
            return Ok(BarSeries::new(req.symbol.clone(), req.period, Vec::new()));
        }
        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart_response(&response.body, &req.symbol, req.period)
    }

    /// Deterministic per-symbol series for offline runs.
    ///
    /// Prices stay in the penny range so default screener thresholds
    /// produce non-empty demo output.
    async fn fetch_fake_history(&self, req: &HistoryRequest) -> Result<BarSeries, SourceError> {
        // Keep the transport in the loop so mock transports still observe calls.
        let touch = HttpRequest::get("https://query1.finance.yahoo.com/v8/finance/chart");
        self.http_client.execute(touch).await.map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        let count = req.period.approx_trading_days();
        let seed = symbol_seed(&req.symbol);
        let now = UtcDateTime::now().into_inner();
        let mut bars = Vec::with_capacity(count);

        for index in 0..count {
            let offset = Duration::days(count.saturating_sub(index + 1) as i64);
            let ts = UtcDateTime::from_offset_datetime(now - offset)
                .map_err(validation_to_error)?;

            let open = 1.0 + (seed.wrapping_add(index as u64 * 7) % 400) as f64 / 100.0;
            let close = if index % 2 == 0 {
                open + 0.02
            } else {
                open - 0.02
            };
            let high = open + 0.05;
            let low = open - 0.04;
            let volume =
                450_000 + seed.wrapping_mul(31).wrapping_add(index as u64 * 17) % 400_000;

            bars.push(
                Bar::new(ts, open, high, low, close, volume).map_err(validation_to_error)?,
            );
        }

        Ok(BarSeries::new(req.symbol.clone(), req.period, bars))
    }
}

impl HistorySource for YahooHistory {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_history(&req).await
            } else {
                self.fetch_fake_history(&req).await
            }
        })
    }
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol
        .as_str()
        .bytes()
        .fold(0u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(byte as u64))
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(format!("yahoo payload failed validation: {error}"))
}

fn parse_chart_response(
    body: &str,
    symbol: &Symbol,
    period: Period,
) -> Result<BarSeries, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = &chart_response.chart.error {
        // "Not Found" style errors mean the symbol has no data; the
        // screening pass drops the ticker rather than failing the run.
        if error.code.eq_ignore_ascii_case("not found") {
            return Ok(BarSeries::new(symbol.clone(), period, Vec::new()));
        }
        return Err(SourceError::unavailable(format!(
            "yahoo chart API error: {}: {}",
            error.code, error.description
        )));
    }

    let result = match chart_response.chart.result.first() {
        Some(result) => result,
        None => return Ok(BarSeries::new(symbol.clone(), period, Vec::new())),
    };

    let timestamps = match &result.timestamp {
        Some(timestamps) => timestamps,
        None => return Ok(BarSeries::new(symbol.clone(), period, Vec::new())),
    };
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| SourceError::internal("no quote data in chart response"))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts_value) in timestamps.iter().enumerate() {
        let ts = UtcDateTime::from_unix_seconds(ts_value)
            .map_err(|e| SourceError::internal(format!("invalid chart timestamp: {e}")))?;

        // Yahoo pads holiday/halted positions with nulls; skip those rows.
        if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) {
            let volume = quote
                .volume
                .get(i)
                .copied()
                .flatten()
                .map(|v| v.max(0) as u64)
                .unwrap_or(0);

            if let Ok(bar) = Bar::new(ts, *open, *high, *low, *close, volume) {
                bars.push(bar);
            }
        }
    }

    Ok(BarSeries::new(symbol.clone(), period, bars))
}

// Yahoo Finance chart response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Vec<YahooChartResult>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}
