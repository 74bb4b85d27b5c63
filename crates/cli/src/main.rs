//! stream-sentiment
//!
//! Registers search rules (optional), opens the filtered stream, and prints
//! one sentiment label per record until the stream ends or Ctrl-C.
//!
//! The bearer token is read from the environment variable named by
//! `auth.token_env` (default `TWITTER_BEARER_TOKEN`); a `.env` file is
//! honoured.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use sentiment_ingestion::{BearerAuth, BearerToken, StreamClient};
use sentiment_pipeline::{ConsoleSink, Pipeline};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.load_config()?;

    let token = BearerToken::from_env(&config.auth.token_env)?;
    let auth = BearerAuth::new(token, config.stream.client_id.clone());
    let client = StreamClient::new(config.stream.clone(), auth, config.pipeline.malformed)?;

    if !config.rules.search_terms.is_empty() {
        client
            .add_rules(&config.rules)
            .await
            .context("registering stream rules")?;
    }

    let pipeline = Pipeline::standard()?.with_max_records(config.pipeline.max_records);
    let mut source = client.open().await.context("opening stream")?;
    let mut sink = ConsoleSink::stdout(config.pipeline.output);

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let stats = pipeline.run_until(&mut source, &mut sink, shutdown).await?;

    info!(
        records = stats.records,
        net_sentiment = stats.net_sentiment(),
        "Done"
    );
    Ok(())
}
