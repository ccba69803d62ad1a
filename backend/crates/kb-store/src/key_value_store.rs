use crate::StoreResult;

use std::sync::Arc;

/// Callback for [`KeyValueStore::update`]. Receives the current raw value
/// and returns the replacement, or `None` to leave the key untouched.
pub type UpdateFn<'a> = dyn FnMut(Option<&str>) -> StoreResult<Option<String>> + 'a;

/// String-keyed storage of raw JSON documents.
///
/// Implementations must run `update` as one atomic read-modify-write with
/// respect to every other call on the same store instance.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    fn keys(&self) -> StoreResult<Vec<String>>;

    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;
