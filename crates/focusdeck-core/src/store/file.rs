use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;

use super::{data_dir, Store};

/// One `<key>.json` file per record under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store records under the per-user data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Store records under an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys double as file names; anything outside the portable set
        // is replaced so a key can never escape the store directory.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.into(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        std::fs::write(self.path_for(key), payload).map_err(|source| StoreError::Io {
            key: key.into(),
            source,
        })
    }
}
