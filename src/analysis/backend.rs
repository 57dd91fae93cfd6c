//! Classifier trait and shared error type.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::SentimentResult;

/// Errors a classifier backend can report.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("request to inference endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("inference endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("inference endpoint returned no labels")]
    EmptyResponse,

    #[error("invalid classifier configuration: {0}")]
    InvalidConfig(String),
}

/// Maps normalized text to a sentiment judgment.
///
/// Implementations must be safe to share across concurrent requests. The
/// pipeline never passes text longer than its configured limit.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError>;
}

/// Which classifier backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierKind {
    #[default]
    Lexicon,
    Remote,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Lexicon => "lexicon",
            ClassifierKind::Remote => "remote",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" | "builtin" => Some(ClassifierKind::Lexicon),
            "remote" | "http" => Some(ClassifierKind::Remote),
            _ => None,
        }
    }
}
