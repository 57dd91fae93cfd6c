//! Service layer for sentiment analysis.
//!
//! This module contains the request-processing logic separated from the
//! transport, so the HTTP server and the CLI drive the same pipeline.

pub mod analysis;

pub use analysis::{AnalysisError, AnalysisService, InputError, DEFAULT_MAX_CHARS};
