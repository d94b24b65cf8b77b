//! In-memory record store for tests and ephemeral sessions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{RecordStore, StoreError, StoreResult};

/// HashMap-backed store. Writes can be switched to fail, simulating a
/// full or disabled medium.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail until switched back.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl RecordStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.reject_writes.get() {
            return Err(StoreError::WriteRejected(format!(
                "medium rejected write to {}",
                key
            )));
        }
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.records.borrow_mut().remove(key);
    }
}
