//! Shared test utilities for document store integration tests
#![allow(dead_code)]

use std::time::{Duration, SystemTime};

use ::common::store::DocumentStore;
use tempfile::TempDir;

/// Set up a test environment with an empty store in a fresh directory
pub async fn setup_test_env() -> (DocumentStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = DocumentStore::open(temp_dir.path().join("data"))
        .await
        .unwrap();
    (store, temp_dir)
}

/// Write `content` to `name` and pin its modification time `age` in the past
pub async fn create_document(store: &DocumentStore, name: &str, content: &str, age: Duration) {
    store.write(name, content.as_bytes()).await.unwrap();
    let file = std::fs::File::options()
        .write(true)
        .open(store.root().join(name))
        .unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}
