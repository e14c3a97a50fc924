mod bars;
mod screen;

use std::sync::Arc;

use pennyscan_core::{BarSeries, ReqwestHttpClient, ScreenReport, YahooHistory};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Structured command output handed to the rendering layer.
#[derive(Debug)]
pub enum CommandOutput {
    Screen(ScreenReport),
    Bars(BarSeries),
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let source = build_source(cli.live);

    match &cli.command {
        Command::Screen(args) => screen::run(args, &source).await,
        Command::Bars(args) => bars::run(args, &source).await,
    }
}

fn build_source(live: bool) -> YahooHistory {
    if live {
        YahooHistory::with_http_client(Arc::new(ReqwestHttpClient::new()))
    } else {
        YahooHistory::default()
    }
}
