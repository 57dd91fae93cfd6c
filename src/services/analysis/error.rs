//! Errors raised by the analysis pipeline.

use thiserror::Error;

use crate::analysis::ClassifierError;

/// Request validation failures. Detected before any classifier call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Required field absent, null, or of the wrong type.
    #[error("Invalid input")]
    Missing,

    #[error("Text exceeds character limit of {limit}")]
    TooLong { limit: usize },
}

/// Failure analyzing a single text.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Sentiment analysis failed")]
    Classifier(#[from] ClassifierError),
}
