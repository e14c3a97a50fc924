//! HTTP routes for the screener service.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use pennyscan_core::{
    screen, HistorySource, Period, ScreenerCriteria, Symbol, TickerMetrics, ValidationError,
};

/// Shared state: the history source handle is the only thing that
/// survives across requests.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn HistorySource>,
}

const INDEX_HTML: &str = include_str!("../assets/index.html");

// ============================================================================
// Request / Response Types
// ============================================================================

/// Screener criteria as submitted by the browser form.
#[derive(Debug, Deserialize)]
pub struct ScreenQuery {
    pub tickers: String,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[serde(default = "default_min_volume")]
    pub min_volume: u64,
    #[serde(default = "default_max_rsi")]
    pub max_rsi: f64,
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_max_price() -> f64 {
    5.0
}

fn default_min_volume() -> u64 {
    500_000
}

fn default_max_rsi() -> f64 {
    70.0
}

fn default_period() -> String {
    String::from("1y")
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub results: Vec<TickerMetrics>,
    pub warnings: Vec<String>,
    /// Human-readable refresh timestamp for the page footer.
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// API-level error mapped onto HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidCriteria(#[from] ValidationError),

    #[error("ticker list contains no valid symbols")]
    NoValidTickers,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            Self::InvalidCriteria(_) => "screen.invalid_criteria",
            Self::NoValidTickers => "screen.no_valid_tickers",
        };
        let body = ErrorResponse {
            code: String::from(code),
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Serve the screener page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("healthy"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: String::from("pennyscan-web"),
    })
}

/// List supported history periods for the form select.
pub async fn periods() -> Json<Vec<&'static str>> {
    Json(Period::ALL.iter().map(|p| p.as_str()).collect())
}

/// Run one full fetch-compute-filter pass.
///
/// Every call recomputes from scratch; there is no partial re-use of a
/// previous screen.
pub async fn run_screen(
    State(state): State<AppState>,
    Query(query): Query<ScreenQuery>,
) -> Result<Json<ScreenResponse>, ApiError> {
    let list = Symbol::parse_list(&query.tickers);
    if list.symbols.is_empty() {
        return Err(ApiError::NoValidTickers);
    }

    let period = Period::from_str(&query.period)?;
    let criteria = ScreenerCriteria::new(
        list.symbols,
        period,
        query.max_price,
        query.min_volume,
        query.max_rsi,
    )?;

    tracing::info!(
        tickers = criteria.symbols.len(),
        period = %criteria.period,
        "running screen pass"
    );

    let mut report = screen(state.source.as_ref(), &criteria).await;
    for (index, rejected) in list.rejected.iter().enumerate() {
        report
            .warnings
            .insert(index, format!("'{rejected}': not a valid ticker symbol"));
    }

    tracing::info!(
        matched = report.results.len(),
        skipped = report.warnings.len(),
        "screen pass complete"
    );

    Ok(Json(ScreenResponse {
        results: report.results,
        warnings: report.warnings,
        last_updated: report.generated_at.format_display(),
    }))
}
