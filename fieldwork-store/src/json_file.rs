use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{Persistence, StoreError};

/// File-backed store: one `<key>.json` file per key under a root directory.
///
/// This is the device-local storage variant of the persistence port. Writes
/// replace the whole payload; there is no locking, so concurrent writers
/// follow last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory. The directory is
    /// created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Persistence for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        tracing::debug!(key, "persisted payload");
        Ok(())
    }
}
