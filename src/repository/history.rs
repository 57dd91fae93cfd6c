//! In-memory analysis history.
//!
//! Append-only log of every successful analysis since process start. Records
//! are never mutated or removed, and nothing survives a restart. Under
//! concurrent requests the order reflects when each analysis completed, not
//! when its request arrived.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::AnalysisRecord;

/// Shared handle to the history log. Clones point at the same log.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Arc<RwLock<Vec<AnalysisRecord>>>,
}

impl HistoryStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. The push happens under the write lock, so readers
    /// see either the whole record or none of it.
    pub fn append(&self, record: AnalysisRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Copy of all records in insertion order.
    pub fn snapshot(&self) -> Vec<AnalysisRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
