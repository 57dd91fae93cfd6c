//! Serve command.

use tracing::info;

use super::super::build_service;
use crate::config::Settings;
use crate::server;

/// Run the HTTP server until shutdown.
pub async fn cmd_serve(settings: &Settings) -> anyhow::Result<()> {
    let service = build_service(settings)?;
    info!(
        classifier = settings.classifier.as_str(),
        max_chars = settings.max_chars,
        "Starting sentiment-api"
    );
    server::serve(service, &settings.bind, settings.cors).await
}
