use crate::key_value_store::UpdateFn;
use crate::{KeyValueStore, StoreError, StoreResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;

/// Process-local store backed by a map. Used by tests and by the
/// `memory` backend for throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, String>>> {
        let location = ErrorLocation::from(Location::caller());
        self.entries
            .lock()
            .map_err(|_| StoreError::LockPoisoned { location })
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys: Vec<String> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()> {
        let mut entries = self.lock()?;
        let current = entries.get(key).map(String::as_str);
        if let Some(next) = f(current)? {
            entries.insert(key.to_string(), next);
        }
        Ok(())
    }
}
