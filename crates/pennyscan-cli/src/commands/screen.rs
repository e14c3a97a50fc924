use std::str::FromStr;

use pennyscan_core::{screen, HistorySource, Period, ScreenerCriteria, Symbol};

use crate::cli::ScreenArgs;
use crate::error::CliError;

use super::CommandOutput;

pub async fn run(args: &ScreenArgs, source: &dyn HistorySource) -> Result<CommandOutput, CliError> {
    let list = Symbol::parse_list(&args.tickers);
    if list.symbols.is_empty() {
        return Err(CliError::Command(String::from(
            "ticker list contains no valid symbols",
        )));
    }

    let period = Period::from_str(&args.period)?;
    let criteria = ScreenerCriteria::new(
        list.symbols,
        period,
        args.max_price,
        args.min_volume,
        args.max_rsi,
    )?;

    let mut report = screen(source, &criteria).await;

    // Surface entries dropped during parsing ahead of per-ticker skips.
    for (index, rejected) in list.rejected.iter().enumerate() {
        report
            .warnings
            .insert(index, format!("'{rejected}': not a valid ticker symbol"));
    }

    Ok(CommandOutput::Screen(report))
}
