use crate::key_value_store::UpdateFn;
use crate::{KeyValueStore, StoreError, StoreKey, StoreResult};

use std::fs;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;
use log::debug;

const FILE_EXTENSION: &str = "json";

/// One `<key>.json` file per key inside `root`.
///
/// Writes go to a temp file that is renamed over the target, so readers
/// never see a half-written document. Read-modify-write cycles hold a
/// mutex for the whole cycle.
pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    #[track_caller]
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        debug!("File store opened at {}", root.display());

        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if !StoreKey::is_valid(key) {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }

    #[track_caller]
    fn lock(&self) -> StoreResult<MutexGuard<'_, ()>> {
        let location = ErrorLocation::from(Location::caller());
        self.write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned { location })
    }

    #[track_caller]
    fn read_path(path: &Path) -> StoreResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn write_path(path: &Path, value: &str) -> StoreResult<()> {
        let caller = Location::caller();
        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));

        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
            location: ErrorLocation::from(caller),
        })?;

        fs::rename(&tmp, path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(caller),
        })
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        Self::read_path(&path)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.lock()?;
        Self::write_path(&path, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.lock()?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path,
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && StoreKey::is_valid(stem)
            {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.lock()?;
        let current = Self::read_path(&path)?;
        if let Some(next) = f(current.as_deref())? {
            Self::write_path(&path, &next)?;
        }
        Ok(())
    }
}
