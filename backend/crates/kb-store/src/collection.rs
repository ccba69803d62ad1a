use crate::{SharedStore, StoreError, StoreResult};

use std::marker::PhantomData;
use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed view of one key holding a JSON array of `T`.
///
/// Every write replaces the whole array. A missing key reads as an empty
/// array, and so does a key holding malformed JSON (logged at warn).
pub struct Collection<T> {
    store: SharedStore,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: SharedStore, key: String) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> StoreResult<Vec<T>> {
        let raw = self.store.read(&self.key)?;
        Ok(decode(&self.key, raw.as_deref()))
    }

    pub fn set(&self, items: &[T]) -> StoreResult<()> {
        let encoded = encode(&self.key, items)?;
        self.store.write(&self.key, &encoded)
    }

    /// Atomic read-modify-write. The array is written back only when `f`
    /// returns `Ok`; an `Err` leaves storage untouched and is returned as is.
    pub fn modify<R, E>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut f = Some(f);
        let mut outcome: Option<Result<R, E>> = None;

        self.store.update(&self.key, &mut |current: Option<&str>| {
            let Some(f) = f.take() else {
                return Ok(None);
            };

            let mut items = decode(&self.key, current);
            match f(&mut items) {
                Ok(value) => {
                    let encoded = encode(&self.key, &items)?;
                    outcome = Some(Ok(value));
                    Ok(Some(encoded))
                }
                Err(e) => {
                    outcome = Some(Err(e));
                    Ok(None)
                }
            }
        })?;

        outcome.unwrap_or_else(|| {
            Err(E::from(StoreError::LockPoisoned {
                location: ErrorLocation::from(Location::caller()),
            }))
        })
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Discarding malformed JSON stored under '{key}': {e}");
            Vec::new()
        }
    }
}

#[track_caller]
fn encode<T: Serialize>(key: &str, items: &[T]) -> StoreResult<String> {
    let caller = Location::caller();
    serde_json::to_string(items).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
        location: ErrorLocation::from(caller),
    })
}
