pub mod backends;
pub mod collection;
pub mod error;
pub mod key_value_store;
pub mod store_key;

pub use backends::file_store::FileStore;
pub use backends::memory_store::MemoryStore;
pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use key_value_store::{KeyValueStore, SharedStore, UpdateFn};
pub use store_key::StoreKey;
