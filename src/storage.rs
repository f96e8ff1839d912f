//! Durable key-value preferences
//!
//! Native builds keep one file per key under the platform data directory;
//! wasm builds go through the browser's `localStorage`.

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to write preference '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(target_arch = "wasm32")]
    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore {
    /// Store under `<data_local_dir>/falcon-chat/prefs`, or `cache/prefs`
    /// when the platform has no data directory.
    pub fn open() -> Self {
        let dir = dirs::data_local_dir()
            .map(|data_dir| data_dir.join("falcon-chat").join("prefs"))
            .unwrap_or_else(|| PathBuf::from("cache").join("prefs"));
        Self { dir }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        fs::write(self.path_for(key), value).map_err(write_err)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path).map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore {
    pub fn open() -> Self {
        Self
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok()?
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

/// Sanitize storage key for filesystem use
#[cfg(not(target_arch = "wasm32"))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
