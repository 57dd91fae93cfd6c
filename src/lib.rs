//! Sentiment analysis over text, served over HTTP.
//!
//! The request pipeline is normalization, validation, classification and
//! recording into an in-memory history. The classifier is a trait object
//! chosen at startup, so tests and alternate backends plug in without
//! touching the pipeline.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod models;
pub mod normalize;
pub mod repository;
pub mod server;
pub mod services;

pub use analysis::{Classifier, ClassifierError};
pub use models::{AnalysisRecord, BatchEntry, ItemFailure, SentimentResult};
pub use normalize::TextNormalizer;
pub use repository::HistoryStore;
pub use services::{AnalysisError, AnalysisService, InputError};
