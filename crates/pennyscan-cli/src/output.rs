use pennyscan_core::{BarSeries, ScreenReport};

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(output, pretty),
        OutputFormat::Table => {
            match output {
                CommandOutput::Screen(report) => render_screen_table(report),
                CommandOutput::Bars(series) => render_bars_table(series),
            }
            Ok(())
        }
    }
}

fn render_json(output: &CommandOutput, pretty: bool) -> Result<(), CliError> {
    let payload = match output {
        CommandOutput::Screen(report) => to_json(report, pretty)?,
        CommandOutput::Bars(series) => to_json(series, pretty)?,
    };
    println!("{payload}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(payload)
}

fn render_screen_table(report: &ScreenReport) {
    if report.is_empty() {
        println!("no stocks met the current criteria.");
    } else {
        println!(
            "{:<8} {:>9} {:>12} {:>7} {:>9} {:>7}",
            "TICKER", "PRICE($)", "VOLUME", "RELVOL", "CHANGE(%)", "RSI"
        );
        for row in &report.results {
            println!(
                "{:<8} {:>9.2} {:>12} {:>7.2} {:>9.2} {:>7.2}",
                row.symbol, row.price, row.volume, row.relative_volume, row.change_pct, row.rsi
            );
        }
    }

    if !report.warnings.is_empty() {
        println!("warnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    println!("last updated: {}", report.generated_at.format_display());
}

fn render_bars_table(series: &BarSeries) {
    println!("{} ({} bars, period {})", series.symbol, series.len(), series.period);
    if series.is_empty() {
        println!("no history available.");
        return;
    }

    println!(
        "{:<22} {:>9} {:>9} {:>9} {:>9} {:>12}",
        "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    );
    for bar in &series.bars {
        println!(
            "{:<22} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>12}",
            bar.ts.format_rfc3339(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }
}
