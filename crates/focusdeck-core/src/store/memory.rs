use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

use super::Store;

/// In-memory store, used by tests and as a no-durability fallback when
/// the file store cannot be opened.
#[derive(Debug, Default)]
pub struct MemStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.records.borrow_mut().insert(key.into(), payload.into());
        Ok(())
    }
}
