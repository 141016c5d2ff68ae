use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use skillboard::{
    cli::Cli,
    graceful_shutdown::cancel_on_shutdown,
    http::client::HttpProfileApi,
    settings::{AppConfig, LogFormat},
    shell::{Page, Shell, TerminalConfirm},
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("skillboard error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::new().context("failed to load configuration")?;
    if let Some(api_url) = &cli.api_url {
        config = config
            .with_api_base_url(api_url.as_str())
            .context("invalid --api-url")?;
    }

    init_tracing(config.log_format, cli.verbose)?;
    tracing::debug!(env = ?config.env, base_url = config.base_url(), "Loaded configuration");

    let api = Arc::new(HttpProfileApi::new(&config)?);

    let root = CancellationToken::new();
    let shutdown = cancel_on_shutdown(root.clone());

    let shell = Shell::new(api, TerminalConfirm::new(cli.yes), root.clone(), config.dashboard_top_skills);
    let rendered = shell.run(Page::from(cli.command)).await;

    // Release the signal listener.
    root.cancel();
    let _ = shutdown.await;

    print!("{}", rendered.text);
    if rendered.failed {
        anyhow::bail!("request did not complete");
    }
    Ok(())
}

fn init_tracing(format: LogFormat, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
