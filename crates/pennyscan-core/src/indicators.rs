//! Indicator math over daily bar series.
//!
//! Everything here is a pure function of an ordered close/volume series;
//! the screening pass feeds it one [`BarSeries`] at a time and only ever
//! consumes the most recent value of each indicator.

use serde::{Deserialize, Serialize};

use crate::{BarSeries, Symbol};

/// Default RSI lookback window.
pub const RSI_PERIOD: usize = 14;

/// Trailing window for the average-volume baseline.
pub const AVG_VOLUME_WINDOW: usize = 20;

/// Minimum bars required to score a ticker: the RSI lookback plus the
/// current bar.
pub const MIN_BARS: usize = RSI_PERIOD + 1;

/// Relative Strength Index over a close series.
///
/// Returns a vector the same length as `closes`: `NaN` for indices below
/// `period`, then `100 - 100 / (1 + avg_gain / avg_loss)` where the
/// averages are simple moving averages of the trailing `period`
/// period-over-period gains and losses.
///
/// Zero-division convention: when `avg_loss` is 0 the value is 100 if
/// `avg_gain` is positive (pure uptrend) and 50 if both averages are 0
/// (flat series).
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut values = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() <= period {
        return values;
    }

    for i in period..closes.len() {
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for j in (i - period + 1)..=i {
            let diff = closes[j] - closes[j - 1];
            if diff > 0.0 {
                gain_sum += diff;
            } else {
                loss_sum -= diff;
            }
        }

        let avg_gain = gain_sum / period as f64;
        let avg_loss = loss_sum / period as f64;

        values[i] = if avg_loss == 0.0 {
            if avg_gain > 0.0 {
                100.0
            } else {
                50.0
            }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };
    }

    values
}

/// Computed screening metrics for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMetrics {
    pub symbol: Symbol,
    pub price: f64,
    pub volume: u64,
    pub relative_volume: f64,
    pub change_pct: f64,
    pub rsi: f64,
}

/// Score one ticker's bar history.
///
/// Returns `None` when the series is shorter than [`MIN_BARS`]; such
/// tickers are excluded from screening rather than treated as errors.
pub fn compute_metrics(series: &BarSeries) -> Option<TickerMetrics> {
    if series.len() < MIN_BARS {
        return None;
    }

    let latest = series.latest()?;
    let mean_volume = series.trailing_mean_volume(AVG_VOLUME_WINDOW);
    let relative_volume = if mean_volume > 0.0 {
        latest.volume as f64 / mean_volume
    } else {
        0.0
    };

    let closes = series.closes();
    let rsi_value = *rsi(&closes, RSI_PERIOD).last()?;

    Some(TickerMetrics {
        symbol: series.symbol.clone(),
        price: latest.close,
        volume: latest.volume,
        relative_volume,
        change_pct: latest.change_pct(),
        rsi: rsi_value,
    })
}
