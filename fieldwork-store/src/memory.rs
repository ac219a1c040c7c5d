use std::collections::HashMap;

use crate::{Persistence, StoreError};

/// In-memory store for tests.
///
/// `failing()` produces a store whose saves always fail, for exercising the
/// abort-and-keep-prior-state path in callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every save.
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail_saves: true,
        }
    }

    /// The number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Persistence for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Backend("simulated save failure".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
