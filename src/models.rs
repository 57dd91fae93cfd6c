//! Data types shared by the analysis pipeline, the history store and the API.

use serde::{Deserialize, Serialize};

/// A single sentiment judgment produced by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sentiment label, e.g. `POSITIVE` or `NEGATIVE`.
    pub label: String,
    /// Confidence in the label, in `[0, 1]`.
    pub score: f64,
}

impl SentimentResult {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score: score.clamp(0.0, 1.0),
        }
    }
}

/// One successfully analyzed text.
///
/// `analysis` serializes as a list of label/score pairs, the same shape a
/// text-classification pipeline returns for a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Text exactly as the client sent it.
    pub text: String,
    /// Text after normalization, as passed to the classifier.
    pub preprocessed_text: String,
    pub analysis: Vec<SentimentResult>,
}

impl AnalysisRecord {
    pub fn new(text: String, preprocessed_text: String, result: SentimentResult) -> Self {
        Self {
            text,
            preprocessed_text,
            analysis: vec![result],
        }
    }
}

/// A batch item that could not be analyzed. The text is echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub text: String,
    pub error: String,
}

/// One slot of a batch response, in the same position as its input text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Analyzed(AnalysisRecord),
    Failed(ItemFailure),
}

impl BatchEntry {
    pub fn text(&self) -> &str {
        match self {
            BatchEntry::Analyzed(record) => &record.text,
            BatchEntry::Failed(failure) => &failure.text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BatchEntry::Failed(_))
    }
}
