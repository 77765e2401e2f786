use std::fs;
use std::sync::Arc;

use business::domain::cart::store::{CartStore, DEFAULT_STORAGE_KEY};
use business::domain::logger::Logger;
use business::domain::notifier::{Notification, Notifier};
use business::domain::product::repository::ProductCatalog;
use business::domain::shared::value_objects::ProductId;
use business::domain::storage::KeyValueStorage;
use persistence::product::repository::InMemoryProductCatalog;
use persistence::storage::file::{FileStorage, FileStorageConfig};
use rust_decimal::Decimal;

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: &Notification) {}
}

fn hydrate(storage: &Arc<FileStorage>) -> CartStore {
    CartStore::hydrate(
        DEFAULT_STORAGE_KEY,
        storage.clone(),
        Arc::new(SilentNotifier),
        Arc::new(SilentLogger),
    )
}

#[test]
fn should_return_none_before_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(FileStorageConfig::new(dir.path()));

    assert_eq!(storage.read(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn should_create_missing_directory_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(FileStorageConfig::new(dir.path().join("nested/data")));

    storage.write(DEFAULT_STORAGE_KEY, b"[]").unwrap();

    assert_eq!(
        storage.read(DEFAULT_STORAGE_KEY).unwrap(),
        Some(b"[]".to_vec())
    );
    assert!(!storage.path_for(DEFAULT_STORAGE_KEY).with_extension("json.tmp").exists());
}

#[tokio::test]
async fn should_restore_cart_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(FileStorageConfig::new(dir.path())));
    let catalog = InMemoryProductCatalog::seeded().unwrap();
    let phone = catalog.get_by_id(&ProductId::new("prod1")).await.unwrap();
    let book = catalog.get_by_id(&ProductId::new("prod3")).await.unwrap();

    let mut store = hydrate(&storage);
    store.add_item(&phone, 1);
    store.add_item(&book, 2);

    let restored = hydrate(&storage);

    assert_eq!(restored.lines(), store.lines());
    assert_eq!(restored.total(), Decimal::new(89997, 2));
    assert_eq!(restored.count(), 3);
}

#[test]
fn should_recover_from_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(FileStorageConfig::new(dir.path())));
    fs::write(storage.path_for(DEFAULT_STORAGE_KEY), b"\x00\x01 not json").unwrap();

    let store = hydrate(&storage);

    assert!(store.is_empty());
    assert!(!storage.path_for(DEFAULT_STORAGE_KEY).exists());
}

#[test]
fn should_persist_empty_cart_after_clear() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(FileStorageConfig::new(dir.path())));
    fs::write(
        storage.path_for(DEFAULT_STORAGE_KEY),
        br#"[{"productId":"prod5","name":"Classic Cotton T-Shirt","price":25.0,"quantity":2,"imageUrl":"","stock":200}]"#,
    )
    .unwrap();

    let mut store = hydrate(&storage);
    assert_eq!(store.count(), 2);
    store.clear();

    assert_eq!(
        storage.read(DEFAULT_STORAGE_KEY).unwrap(),
        Some(b"[]".to_vec())
    );
}
