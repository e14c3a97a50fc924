use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pennyscan_core::{ReqwestHttpClient, YahooHistory};
use pennyscan_web::{app, AppState};

/// Pennyscan web server.
#[derive(Debug, Parser)]
#[command(name = "pennyscan-web", version, about = "Browser UI for the pennyscan screener")]
struct ServerArgs {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Fetch from the live Yahoo Finance API instead of offline data.
    #[arg(long, default_value_t = false)]
    live: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source: Arc<dyn pennyscan_core::HistorySource> = if args.live {
        Arc::new(YahooHistory::with_http_client(Arc::new(
            ReqwestHttpClient::new(),
        )))
    } else {
        Arc::new(YahooHistory::default())
    };

    tracing::info!(
        listen = %args.listen,
        live = args.live,
        "pennyscan-web v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app(AppState { source })).await?;

    Ok(())
}
