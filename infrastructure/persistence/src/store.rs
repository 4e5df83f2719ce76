use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalStoreError {
    #[error("local_store.io_error")]
    Io,
    #[error("local_store.invalid_key")]
    InvalidKey,
}

/// Configuration for the on-disk key-value store
pub struct StorageConfig {
    pub directory: PathBuf,
}

impl StorageConfig {
    /// Creates a configuration for the given directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_DIR: directory holding persisted documents
    ///   (default: ".local-storage")
    pub fn from_env() -> Self {
        let directory =
            std::env::var("CART_STORAGE_DIR").unwrap_or_else(|_| ".local-storage".to_string());
        Self {
            directory: PathBuf::from(directory),
        }
    }
}

/// Directory-backed key-value store, one JSON document per key.
///
/// The session-local equivalent of browser local storage: small, unlocked,
/// last-write-wins. Not a database and not meant to be one.
pub struct LocalStore {
    directory: PathBuf,
}

impl LocalStore {
    /// Opens the store, creating the backing directory if needed
    pub async fn open(config: &StorageConfig) -> Result<Self, LocalStoreError> {
        tokio::fs::create_dir_all(&config.directory)
            .await
            .map_err(|_| LocalStoreError::Io)?;

        Ok(Self {
            directory: config.directory.clone(),
        })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, LocalStoreError> {
        // Keys name files directly; restrict them to a safe charset.
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LocalStoreError::InvalidKey);
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, LocalStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(_) => Err(LocalStoreError::Io),
        }
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        tokio::fs::write(&path, value)
            .await
            .map_err(|_| LocalStoreError::Io)
    }

    pub async fn remove(&self, key: &str) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(_) => Err(LocalStoreError::Io),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(&StorageConfig::new(dir.path()))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let (_dir, store) = open_temp_store().await;

        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_store_and_read_back_value() {
        let (_dir, store) = open_temp_store().await;

        store.put("cart", "[1,2,3]").await.unwrap();

        assert_eq!(store.get("cart").await.unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn should_overwrite_existing_value() {
        let (_dir, store) = open_temp_store().await;

        store.put("cart", "old").await.unwrap();
        store.put("cart", "new").await.unwrap();

        assert_eq!(store.get("cart").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn should_remove_value_and_tolerate_double_remove() {
        let (_dir, store) = open_temp_store().await;

        store.put("cart", "value").await.unwrap();
        store.remove("cart").await.unwrap();
        store.remove("cart").await.unwrap();

        assert_eq!(store.get("cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_reject_unsafe_keys() {
        let (_dir, store) = open_temp_store().await;

        assert!(matches!(
            store.get("../escape").await.unwrap_err(),
            LocalStoreError::InvalidKey
        ));
        assert!(matches!(
            store.put("", "value").await.unwrap_err(),
            LocalStoreError::InvalidKey
        ));
    }
}
