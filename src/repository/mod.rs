//! Storage for analysis results.

mod history;

pub use history::HistoryStore;
