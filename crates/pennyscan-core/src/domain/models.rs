use serde::{Deserialize, Serialize};

use crate::{Period, Symbol, UtcDateTime, ValidationError};

/// Daily OHLCV bar record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ts: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    pub fn new(
        ts: UtcDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Signed intraday change in percent, 0 when the open is 0.
    pub fn change_pct(&self) -> f64 {
        if self.open > 0.0 {
            (self.close - self.open) / self.open * 100.0
        } else {
            0.0
        }
    }
}

/// Chronologically ordered bar history for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub symbol: Symbol,
    pub period: Period,
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: Symbol, period: Period, bars: Vec<Bar>) -> Self {
        Self {
            symbol,
            period,
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar, if any.
    pub fn latest(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Close prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// Mean volume over the trailing `window` bars (fewer if unavailable).
    pub fn trailing_mean_volume(&self, window: usize) -> f64 {
        let take = window.min(self.bars.len());
        if take == 0 {
            return 0.0;
        }
        let start = self.bars.len() - take;
        let total: u64 = self.bars[start..].iter().map(|bar| bar.volume).sum();
        total as f64 / take as f64
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> UtcDateTime {
        UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp")
    }

    #[test]
    fn rejects_invalid_bar_bounds() {
        let err = Bar::new(ts(), 10.0, 12.0, 9.0, 12.5, 10).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBarBounds));
    }

    #[test]
    fn rejects_high_below_low() {
        let err = Bar::new(ts(), 10.0, 9.0, 11.0, 10.0, 10).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBarRange));
    }

    #[test]
    fn computes_intraday_change() {
        let bar = Bar::new(ts(), 1.5, 2.0, 1.4, 2.0, 100).expect("bar");
        assert!((bar.change_pct() - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn trailing_mean_volume_uses_available_bars() {
        let symbol = Symbol::parse("ZOM").expect("symbol");
        let bars = vec![
            Bar::new(ts(), 1.0, 1.1, 0.9, 1.0, 100).expect("bar"),
            Bar::new(ts(), 1.0, 1.1, 0.9, 1.0, 300).expect("bar"),
        ];
        let series = BarSeries::new(symbol, Period::ThreeMonths, bars);
        assert_eq!(series.trailing_mean_volume(20), 200.0);
        assert_eq!(series.trailing_mean_volume(1), 300.0);
    }
}
