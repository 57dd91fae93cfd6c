//! One-shot analysis from the command line.

use super::super::build_service;
use crate::config::Settings;

/// Analyze `texts` with the configured pipeline and print the batch result.
pub async fn cmd_analyze(settings: &Settings, texts: Vec<String>) -> anyhow::Result<()> {
    let service = build_service(settings)?;
    let entries = service.analyze_many(texts).await;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
