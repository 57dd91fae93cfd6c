//! Classifier backed by a remote text-classification endpoint.
//!
//! Speaks the Hugging Face inference API shape: the request body is
//! `{"inputs": "<text>"}` and the response is a list of label/score pairs,
//! optionally nested one level (`[[{...}, {...}]]`). Each call makes exactly
//! one request; any transport error or non-success status is returned as a
//! [`ClassifierError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::backend::{Classifier, ClassifierError};
use crate::models::SentimentResult;

/// Connection settings for [`RemoteClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Full URL of the classification endpoint.
    pub url: Option<String>,
    /// Bearer token sent in the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_token: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    /// Highest-scoring label across the response.
    fn into_top(self) -> Option<SentimentResult> {
        let labels = match self {
            InferenceResponse::Nested(outer) => outer.into_iter().flatten().collect(),
            InferenceResponse::Flat(labels) => labels,
        };
        labels
            .into_iter()
            .filter(|l| l.score.is_finite())
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|l| SentimentResult::new(l.label.to_uppercase(), l.score))
    }
}

/// HTTP client for a hosted sentiment model.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    client: Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(config: &RemoteConfig) -> Result<Self, ClassifierError> {
        let endpoint = config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ClassifierError::InvalidConfig("remote classifier requires a URL".to_string())
            })?
            .to_string();

        let mut headers = HeaderMap::new();
        if let Some(token) = config.api_token.as_deref().filter(|t| !t.trim().is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|_| ClassifierError::InvalidConfig("invalid API token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            debug!("{}: inference endpoint returned {}", self.endpoint, status);
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InferenceResponse = response.json().await?;
        parsed.into_top().ok_or(ClassifierError::EmptyResponse)
    }
}
