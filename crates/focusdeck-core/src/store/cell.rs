use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{load, save, Store};

/// A typed value mirrored to one persisted record.
///
/// The in-memory value is authoritative; every mutation writes through
/// best-effort. Constructed by reading the record (falling back to a
/// default), so a cell is always usable even when the store is not.
#[derive(Debug, Clone)]
pub struct StateCell<T> {
    key: &'static str,
    value: T,
}

impl<T: Serialize + DeserializeOwned> StateCell<T> {
    /// Read `key` from the store, falling back to `default`.
    pub fn load(store: &dyn Store, key: &'static str, default: T) -> Self {
        let value = load(store, key, default);
        Self { key, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and persist it.
    pub fn set(&mut self, store: &dyn Store, value: T) {
        self.value = value;
        save(store, self.key, &self.value);
    }

    /// Mutate the value in place and persist it.
    pub fn update(&mut self, store: &dyn Store, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        save(store, self.key, &self.value);
    }
}
