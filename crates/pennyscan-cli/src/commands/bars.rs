use std::str::FromStr;

use pennyscan_core::{HistoryRequest, HistorySource, Period, Symbol};

use crate::cli::BarsArgs;
use crate::error::CliError;

use super::CommandOutput;

pub async fn run(args: &BarsArgs, source: &dyn HistorySource) -> Result<CommandOutput, CliError> {
    let symbol = Symbol::parse(&args.ticker)?;
    let period = Period::from_str(&args.period)?;

    let series = source
        .history(HistoryRequest::new(symbol, period))
        .await
        .map_err(|error| CliError::Command(error.to_string()))?;

    Ok(CommandOutput::Bars(series))
}
