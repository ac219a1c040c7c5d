//! Persistence port for the fieldwork crates.
//!
//! Storage is a flat key/value contract over JSON blobs: `load` returns the
//! raw payload for a key (or nothing), `save` replaces it. The typed helpers
//! `load_or_default` and `save_value` layer serde on top and implement the
//! tolerance rule for corrupt payloads: a value that no longer deserializes
//! falls back to the default with a warning instead of failing the caller.
//!
//! Two implementations are provided: `JsonFileStore`, which keeps one file
//! per key under a directory (the local-storage analog), and `MemoryStore`
//! for tests.

mod error;
pub use error::StoreError;

mod json_file;
pub use json_file::JsonFileStore;

mod memory;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};

/// The persistence port: keyed string payloads.
///
/// Implementations only move bytes; serialization policy lives in the typed
/// helpers below so every store handles corruption the same way.
pub trait Persistence {
    /// Load the payload stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the payload stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load and deserialize the value under `key`, falling back to the default
/// when the key is absent or the stored payload is corrupt.
///
/// Corruption is an expected consequence of the weak persistence contract,
/// so it degrades silently (logged, default returned) rather than erroring.
pub fn load_or_default<T>(store: &dyn Persistence, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match store.load(key)? {
        None => Ok(T::default()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::warn!(key, %error, "discarding corrupt stored payload");
                Ok(T::default())
            }
        },
    }
}

/// Serialize `value` and store it under `key`.
pub fn save_value<T>(store: &mut dyn Persistence, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;
    store.save(key, &raw)
}
