//! In-memory string store.

use crate::analysis;
use crate::error::{ServiceError, ServiceResult};
use crate::storage::StringStore;
use crate::types::AnalyzedString;

/// Vec-backed store; `list` preserves insertion order.
#[derive(Debug, Default)]
pub struct MemoryStringStore {
    records: Vec<AnalyzedString>,
}

impl MemoryStringStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStringStore {
    fn insert(&mut self, record: AnalyzedString) -> ServiceResult<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(ServiceError::Conflict("String already exists".to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Option<AnalyzedString> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn get_by_value(&self, value: &str) -> Option<AnalyzedString> {
        self.get_by_id(&analysis::sha256_hex(value))
    }

    fn list(&self) -> Vec<AnalyzedString> {
        self.records.clone()
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
