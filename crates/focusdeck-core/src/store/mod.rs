//! Best-effort persistent key-value store.
//!
//! Each stateful entity persists one opaque JSON record under its own
//! key; there is no cross-key atomicity, versioning or migration. Reads
//! that fail for any reason (missing key, malformed payload, store
//! unavailable) fall back to a caller-supplied default, and writes that
//! fail are swallowed: the in-memory value stays authoritative and only
//! durability is lost. Failures are logged at `warn`, never surfaced.

mod cell;
mod file;
mod memory;

pub use cell::StateCell;
pub use file::FileStore;
pub use memory::MemStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::StoreError;

/// Persisted key namespace. Names are preserved from the original
/// widget so existing records keep loading.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const FOCUS_MODE: &str = "focusMode";
    pub const STATS: &str = "pomodoro_stats";
    pub const SETTINGS: &str = "pomodoro_settings";
    pub const MODE: &str = "pomodoro_mode";
    pub const AMBIENT_VOLUMES: &str = "ambient_volumes";
    pub const TODOS: &str = "todos";
}

/// Raw JSON-text record storage, one record per key.
pub trait Store {
    /// Read the payload stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `payload` under `key`, replacing any previous record.
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        (**self).write(key, payload)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        (**self).write(key, payload)
    }
}

/// Deserialize the value under `key`, or fall back to `default` on any
/// failure. Never raises.
pub fn load<T: DeserializeOwned>(store: &dyn Store, key: &str, default: T) -> T {
    match store.read(key) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("discarding unreadable record '{key}': {err}");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            log::warn!("failed to read record '{key}': {err}");
            default
        }
    }
}

/// Serialize `value` and write it under `key`, best-effort.
pub fn save<T: Serialize>(store: &dyn Store, key: &str, value: &T) {
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("failed to serialize record '{key}': {err}");
            return;
        }
    };
    if let Err(err) = store.write(key, &payload) {
        log::warn!("failed to write record '{key}': {err}");
    }
}

/// Returns `~/.config/focusdeck[-dev]/` based on FOCUSDECK_ENV.
///
/// Set FOCUSDECK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusdeck-dev")
    } else {
        base_dir.join("focusdeck")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
