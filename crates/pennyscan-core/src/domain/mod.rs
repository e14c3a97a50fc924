//! Canonical domain types for pennyscan market data.
//!
//! All models validate their invariants at construction time and carry
//! full serde support:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Bar`] | Daily OHLCV bar with UTC timestamp |
//! | [`BarSeries`] | Ordered bar history for a symbol/period |
//! | [`Symbol`] | Validated, uppercase-normalized ticker |
//! | [`TickerList`] | Free-text ticker input split into symbols and rejects |
//! | [`Period`] | History lookback window (1y, 6mo, 3mo) |
//! | [`UtcDateTime`] | RFC3339 timestamp guaranteed UTC |

mod models;
mod period;
mod symbol;
mod timestamp;

pub use models::{Bar, BarSeries};
pub use period::Period;
pub use symbol::{Symbol, TickerList};
pub use timestamp::UtcDateTime;
