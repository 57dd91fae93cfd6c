//! Sentiment classifier backends.
//!
//! The pipeline only sees the [`Classifier`] trait; which backend runs is a
//! startup decision:
//! - Lexicon: built-in word-list scorer, no network or model files
//! - Remote: hosted text-classification endpoint over HTTP
//!
//! Tests inject their own implementation.

mod backend;
mod lexicon;
mod remote;

use std::sync::Arc;

pub use backend::{Classifier, ClassifierError, ClassifierKind};
pub use lexicon::{LexiconClassifier, NEGATIVE, POSITIVE};
pub use remote::{RemoteClassifier, RemoteConfig};

/// Construct the configured classifier backend.
pub fn build_classifier(
    kind: ClassifierKind,
    remote: &RemoteConfig,
) -> Result<Arc<dyn Classifier>, ClassifierError> {
    let classifier: Arc<dyn Classifier> = match kind {
        ClassifierKind::Lexicon => Arc::new(LexiconClassifier::new()),
        ClassifierKind::Remote => Arc::new(RemoteClassifier::new(remote)?),
    };
    tracing::debug!("Using {} classifier", classifier.name());
    Ok(classifier)
}
