//! CLI argument definitions for pennyscan.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `screen` | Run the screening pass over a ticker list |
//! | `bars` | Fetch and display raw daily history for one ticker |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--live` | `false` | Fetch from Yahoo Finance instead of offline data |
//!
//! # Examples
//!
//! ```bash
//! # Screen the default watchlist offline
//! pennyscan screen "SNDL, NOK, BBIG, ZOM"
//!
//! # Live screen with custom thresholds
//! pennyscan screen "TLRY, AMC, GME" --live --max-price 10 --min-volume 250000
//!
//! # Inspect one ticker's raw history as JSON
//! pennyscan bars SNDL --period 3mo --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Penny-stock screener over daily Yahoo Finance history.
///
/// Each invocation re-fetches history for every ticker, recomputes
/// RSI(14), relative volume, and intraday change, and filters against
/// the supplied thresholds. Nothing is cached between runs.
#[derive(Debug, Parser)]
#[command(
    name = "pennyscan",
    author,
    version,
    about = "Stateless penny-stock screener",
    long_about = "Pennyscan fetches recent daily price history for a ticker list, computes \
RSI(14), 20-bar relative volume, and intraday change, and filters the tickers against \
max-price / min-volume / max-RSI thresholds.\n\
\n\
By default history comes from a deterministic offline generator; pass --live to hit \
the Yahoo Finance chart endpoint instead."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Fetch from the live Yahoo Finance API instead of offline data.
    #[arg(long, global = true, default_value_t = false)]
    pub live: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table for terminal display.
    Table,
    /// JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the screening pass over a comma-separated ticker list.
    Screen(ScreenArgs),
    /// Fetch raw daily history for a single ticker.
    Bars(BarsArgs),
}

/// Arguments for the `screen` command.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Comma-separated ticker list, e.g. "SNDL, NOK, BBIG, ZOM".
    pub tickers: String,

    /// Maximum last price in dollars.
    #[arg(long, default_value_t = 5.0)]
    pub max_price: f64,

    /// Minimum last-bar volume.
    #[arg(long, default_value_t = 500_000)]
    pub min_volume: u64,

    /// Maximum RSI(14) value (0-100).
    #[arg(long, default_value_t = 70.0)]
    pub max_rsi: f64,

    /// History lookback period (1y, 6mo, 3mo).
    #[arg(long, default_value = "1y")]
    pub period: String,
}

/// Arguments for the `bars` command.
#[derive(Debug, Args)]
pub struct BarsArgs {
    /// Ticker symbol, e.g. SNDL.
    pub ticker: String,

    /// History lookback period (1y, 6mo, 3mo).
    #[arg(long, default_value = "1y")]
    pub period: String,
}
