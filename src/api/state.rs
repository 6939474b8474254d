//! API server state

use std::sync::Arc;

use crate::types::ProductionRecord;

/// API server state
///
/// The records are loaded once at startup and never mutated, so the state is
/// shared between requests without locking.
#[derive(Clone)]
pub struct AppState {
    records: Arc<Vec<ProductionRecord>>,
}

impl AppState {
    pub fn new(records: Vec<ProductionRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> Arc<Vec<ProductionRecord>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
