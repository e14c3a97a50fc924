//! History provider adapters.

mod yahoo;

pub use yahoo::YahooHistory;
