use super::errors::StorageError;

/// A durable key-value slot holding opaque bytes.
///
/// Implementations decide the medium (files, memory, browser storage). A key
/// that was never written reads back as `Ok(None)`.
pub trait KeyValueStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
