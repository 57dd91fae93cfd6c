//! Sentiment analysis service.
//!
//! Validates input, normalizes it, runs the classifier and records each
//! successful result in the history store. Shared by the HTTP handlers and
//! the `analyze` CLI command.

mod error;

use std::sync::Arc;

use tracing::{debug, warn};

pub use error::{AnalysisError, InputError};

use crate::analysis::Classifier;
use crate::models::{AnalysisRecord, BatchEntry, ItemFailure};
use crate::normalize::TextNormalizer;
use crate::repository::HistoryStore;

/// Default per-text limit, in characters (Unicode scalar values).
pub const DEFAULT_MAX_CHARS: usize = 280;

/// Orchestrates normalization, classification and history recording.
#[derive(Clone)]
pub struct AnalysisService {
    normalizer: TextNormalizer,
    classifier: Arc<dyn Classifier>,
    history: HistoryStore,
    max_chars: usize,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn Classifier>, history: HistoryStore) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            classifier,
            history,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Override the per-text character limit.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Length is counted in chars, so multi-byte text gets the same budget.
    fn check_length(&self, text: &str) -> Result<(), InputError> {
        if text.chars().count() > self.max_chars {
            return Err(InputError::TooLong {
                limit: self.max_chars,
            });
        }
        Ok(())
    }

    /// Normalize, classify and record one text already known to be in limit.
    async fn analyze_checked(&self, text: String) -> Result<AnalysisRecord, AnalysisError> {
        let preprocessed = self.normalizer.normalize(&text);
        let result = self.classifier.classify(&preprocessed).await?;
        debug!(
            "{} classified {:?} as {} ({:.3})",
            self.classifier.name(),
            preprocessed,
            result.label,
            result.score
        );

        let record = AnalysisRecord::new(text, preprocessed, result);
        self.history.append(record.clone());
        Ok(record)
    }

    /// Analyze a single text.
    ///
    /// Fails with [`InputError::TooLong`] before touching the classifier if
    /// the text is over the limit; nothing is recorded on failure.
    pub async fn analyze_one(&self, text: String) -> Result<AnalysisRecord, AnalysisError> {
        self.check_length(&text)?;
        self.analyze_checked(text).await.inspect_err(|e| {
            if let AnalysisError::Classifier(err) = e {
                warn!("Classifier {} failed: {}", self.classifier.name(), err);
            }
        })
    }

    /// Analyze texts one after another, in order.
    ///
    /// A failing item gets an error entry in its slot and is left out of the
    /// history; the remaining items are still processed.
    pub async fn analyze_many(&self, texts: Vec<String>) -> Vec<BatchEntry> {
        let mut entries = Vec::with_capacity(texts.len());

        for text in texts {
            if let Err(e) = self.check_length(&text) {
                entries.push(BatchEntry::Failed(ItemFailure {
                    text,
                    error: e.to_string(),
                }));
                continue;
            }

            match self.analyze_checked(text.clone()).await {
                Ok(record) => entries.push(BatchEntry::Analyzed(record)),
                Err(e) => {
                    warn!("Classifier {} failed on batch item: {}", self.classifier.name(), e);
                    entries.push(BatchEntry::Failed(ItemFailure {
                        text,
                        error: e.to_string(),
                    }));
                }
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ClassifierError;
    use crate::models::SentimentResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed result and counts calls; fails on texts containing "FAIL".
    #[derive(Default)]
    struct FakeClassifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Classifier for FakeClassifier {
        fn name(&self) -> &str {
            "fake"
        }

        async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if text.contains("FAIL") {
                return Err(ClassifierError::EmptyResponse);
            }
            Ok(SentimentResult::new("POSITIVE", 0.99))
        }
    }

    fn service() -> (AnalysisService, Arc<FakeClassifier>) {
        let fake = Arc::new(FakeClassifier::default());
        let service = AnalysisService::new(fake.clone(), HistoryStore::new());
        (service, fake)
    }

    #[tokio::test]
    async fn test_analyze_one_records_result() {
        let (service, fake) = service();

        let record = service
            .analyze_one("  I love   Python! https://python.org ".to_string())
            .await
            .unwrap();

        assert_eq!(record.text, "  I love   Python! https://python.org ");
        assert_eq!(record.preprocessed_text, "I love Python!");
        assert_eq!(record.analysis, vec![SentimentResult::new("POSITIVE", 0.99)]);
        assert_eq!(service.history().snapshot(), vec![record]);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_one_rejects_long_text_without_classifying() {
        let (service, fake) = service();

        let err = service.analyze_one("a".repeat(281)).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Input(InputError::TooLong { limit: 280 })
        ));
        assert_eq!(err.to_string(), "Text exceeds character limit of 280");
        assert!(service.history().is_empty());
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_limit_counts_characters_not_bytes() {
        let (service, _) = service();

        assert!(service.analyze_one("é".repeat(280)).await.is_ok());
        assert!(service.analyze_one("é".repeat(281)).await.is_err());
        assert!(service.analyze_one("a".repeat(280)).await.is_ok());
        assert_eq!(service.history().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let (service, _) = service();
        let service = service.with_max_chars(5);

        let err = service.analyze_one("too long".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "Text exceeds character limit of 5");
        assert_eq!(service.max_chars(), 5);
    }

    #[tokio::test]
    async fn test_analyze_one_classifier_failure_records_nothing() {
        let (service, _) = service();

        let err = service.analyze_one("FAIL".to_string()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Classifier(_)));
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_many_partial_failure() {
        let (service, fake) = service();
        let texts = vec![
            "first".to_string(),
            "b".repeat(300),
            "third".to_string(),
            "FAIL here".to_string(),
            "fifth".to_string(),
        ];

        let entries = service.analyze_many(texts.clone()).await;

        assert_eq!(entries.len(), 5);
        for (entry, text) in entries.iter().zip(&texts) {
            assert_eq!(entry.text(), text);
        }
        assert!(!entries[0].is_failure());
        assert!(matches!(
            &entries[1],
            BatchEntry::Failed(f) if f.error == "Text exceeds character limit of 280"
        ));
        assert!(!entries[2].is_failure());
        assert!(matches!(
            &entries[3],
            BatchEntry::Failed(f) if f.error == "Sentiment analysis failed"
        ));
        assert!(!entries[4].is_failure());

        let history: Vec<_> = service
            .history()
            .snapshot()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(history, vec!["first", "third", "fifth"]);
        // Over-limit item never reaches the classifier
        assert_eq!(fake.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_analyze_many_empty_batch() {
        let (service, fake) = service();
        assert!(service.analyze_many(Vec::new()).await.is_empty());
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_history_spans_single_and_batch_calls() {
        let (service, _) = service();
        service.analyze_one("one".to_string()).await.unwrap();
        service
            .analyze_many(vec!["two".to_string(), "three".to_string()])
            .await;

        let history: Vec<_> = service
            .history()
            .snapshot()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(history, vec!["one", "two", "three"]);
    }
}
