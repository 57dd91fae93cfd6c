//! HTTP request handlers.

mod analyze;
mod status;

pub use analyze::{analyze, batch_analyze, AnalyzeRequest, BatchRequest};
pub use status::{get_history, health_check, HealthResponse};
