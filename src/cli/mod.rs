//! Command-line interface.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::analysis::{build_classifier, Classifier, ClassifierKind};
use crate::config::{load_settings_with_options, LoadOptions, Settings};
use crate::repository::HistoryStore;
use crate::services::AnalysisService;

#[derive(Parser, Debug)]
#[command(
    name = "sentiment-api",
    version,
    about = "Sentiment analysis HTTP service"
)]
pub struct Cli {
    /// Config file (JSON). Defaults to auto-discovery.
    #[arg(long, global = true, env = "SENTIMENT_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum characters per text.
    #[arg(long, global = true, env = "SENTIMENT_API_MAX_CHARS")]
    pub max_chars: Option<usize>,

    /// Classifier backend: lexicon or remote.
    #[arg(long, global = true, env = "SENTIMENT_API_CLASSIFIER", value_parser = parse_classifier)]
    pub classifier: Option<ClassifierKind>,

    /// Remote classification endpoint URL.
    #[arg(long, global = true, env = "SENTIMENT_API_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Bearer token for the remote endpoint.
    #[arg(long, global = true, env = "SENTIMENT_API_REMOTE_TOKEN", hide_env_values = true)]
    pub remote_token: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind (host:port).
        #[arg(long, env = "SENTIMENT_API_BIND")]
        bind: Option<String>,

        /// Allow cross-origin requests from any origin.
        #[arg(long)]
        cors: bool,
    },
    /// Analyze texts once and print the results as JSON
    Analyze {
        /// Texts to analyze
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

fn parse_classifier(s: &str) -> Result<ClassifierKind, String> {
    ClassifierKind::from_str(s).ok_or_else(|| format!("unknown classifier '{}'", s))
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        let (bind, cors) = match &self.command {
            Some(Commands::Serve { bind, cors }) => (bind.clone(), *cors),
            _ => (None, false),
        };

        LoadOptions {
            config_path: self.config.clone(),
            bind,
            max_chars: self.max_chars,
            classifier: self.classifier,
            remote_url: self.remote_url.clone(),
            remote_token: self.remote_token.clone(),
            cors,
        }
    }
}

/// Build the analysis service described by `settings`.
pub fn build_service(settings: &Settings) -> anyhow::Result<AnalysisService> {
    let classifier: Arc<dyn Classifier> = build_classifier(settings.classifier, &settings.remote)?;
    Ok(AnalysisService::new(classifier, HistoryStore::new()).with_max_chars(settings.max_chars))
}

/// Run the parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings_with_options(cli.load_options()).await?;

    match cli.command {
        None | Some(Commands::Serve { .. }) => commands::cmd_serve(&settings).await,
        Some(Commands::Analyze { texts }) => commands::cmd_analyze(&settings, texts).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "sentiment-api",
            "--max-chars",
            "100",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--cors",
        ])
        .unwrap();

        let options = cli.load_options();
        assert_eq!(options.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(options.max_chars, Some(100));
        assert!(options.cors);
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "sentiment-api",
            "analyze",
            "I love Python!",
            "--classifier",
            "lexicon",
        ])
        .unwrap();

        assert_eq!(cli.classifier, Some(ClassifierKind::Lexicon));
        assert!(matches!(
            cli.command,
            Some(Commands::Analyze { ref texts }) if texts == &["I love Python!"]
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_classifier() {
        let result = Cli::try_parse_from(["sentiment-api", "--classifier", "bert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_service_uses_settings() {
        let settings = Settings {
            max_chars: 42,
            ..Default::default()
        };
        let service = build_service(&settings).unwrap();
        assert_eq!(service.max_chars(), 42);
        assert!(service.history().is_empty());
    }
}
