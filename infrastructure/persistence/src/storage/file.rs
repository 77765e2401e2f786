use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

/// Configuration for the file-backed storage
#[derive(Debug, Clone)]
pub struct FileStorageConfig {
    pub directory: PathBuf,
    pub extension: String,
}

impl FileStorageConfig {
    /// Creates a new configuration storing `<key>.json` files under `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: "json".to_string(),
        }
    }
}

/// Stores each key as one file in a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: FileStorageConfig,
}

impl FileStorage {
    pub fn new(config: FileStorageConfig) -> Self {
        Self { config }
    }

    /// Path of the file backing `key`. Characters outside `[A-Za-z0-9_-]` are
    /// replaced so a key can never escape the storage directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.config
            .directory
            .join(format!("{}.{}", file_stem, self.config.extension))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read_failure(e.to_string())),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.config.directory)
            .map_err(|e| StorageError::write_failure(e.to_string()))?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension(format!("{}.tmp", self.config.extension));
        fs::write(&tmp_path, bytes).map_err(|e| StorageError::write_failure(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::write_failure(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::write_failure(e.to_string())),
        }
    }
}
