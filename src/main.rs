use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentiment_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sentiment_api={level},tower_http={level}",
            level = cli.log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::run(cli).await
}
