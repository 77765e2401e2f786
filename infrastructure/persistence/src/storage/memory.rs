use std::collections::HashMap;
use std::sync::Mutex;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

/// Volatile storage, lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::read_failure("storage lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::write_failure("storage lock poisoned"))?;
        slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::write_failure("storage lock poisoned"))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_back_written_bytes() {
        let storage = InMemoryStorage::new();

        storage.write("cartItems", b"[]").unwrap();

        assert_eq!(storage.read("cartItems").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn should_return_none_for_missing_key() {
        let storage = InMemoryStorage::new();

        assert_eq!(storage.read("cartItems").unwrap(), None);
    }

    #[test]
    fn should_forget_removed_key() {
        let storage = InMemoryStorage::new();
        storage.write("cartItems", b"[]").unwrap();

        storage.remove("cartItems").unwrap();
        storage.remove("cartItems").unwrap();

        assert_eq!(storage.read("cartItems").unwrap(), None);
    }
}
