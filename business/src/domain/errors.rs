/// Storage errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.not_found")]
    NotFound,
    #[error("storage.persistence")]
    Persistence,
    #[error("storage.corrupted")]
    Corrupted,
}

impl StorageError {
    pub fn not_found() -> Self {
        StorageError::NotFound
    }
    pub fn persistence() -> Self {
        StorageError::Persistence
    }
    pub fn corrupted() -> Self {
        StorageError::Corrupted
    }
}
