//! Health and history handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::super::AppState;
use crate::models::AnalysisRecord;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check. Independent of any analysis state.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "API is running",
    })
}

/// All recorded analyses, oldest first.
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<AnalysisRecord>> {
    Json(state.service.history().snapshot())
}
