/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Unavailable,
}

/// Errors raised by a key-value storage slot.
///
/// The cart store never propagates these; they are logged and the in-memory
/// state stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failure: {0}")]
    ReadFailure(String),
    #[error("storage.write_failure: {0}")]
    WriteFailure(String),
}

impl StorageError {
    pub fn read_failure(reason: impl Into<String>) -> Self {
        StorageError::ReadFailure(reason.into())
    }
    pub fn write_failure(reason: impl Into<String>) -> Self {
        StorageError::WriteFailure(reason.into())
    }
}
