use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize value for key {key}: {source} {location}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid store key: {key:?} {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Store lock poisoned {location}")]
    LockPoisoned { location: ErrorLocation },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
