//! Single and batch analysis handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::super::error::ApiError;
use super::super::AppState;
use crate::models::{AnalysisRecord, BatchEntry};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Body of `POST /batch`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

/// Analyze one text.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let Json(request) = payload?;
    let record = state.service.analyze_one(request.text).await?;
    Ok(Json(record))
}

/// Analyze many texts. Per-item failures are reported in place.
pub async fn batch_analyze(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<Vec<BatchEntry>>, ApiError> {
    let Json(request) = payload?;
    let entries = state.service.analyze_many(request.texts).await;
    Ok(Json(entries))
}
