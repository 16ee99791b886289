//! Integration tests for renaming documents

mod common;

use ::common::store::StoreError;

#[tokio::test]
async fn test_mv_document() {
    let (store, _temp) = common::setup_test_env().await;
    store.write("old.txt", b"data").await.unwrap();

    store.mv("old.txt", "new.txt").await.unwrap();

    assert!(!store.exists("old.txt").await.unwrap());
    assert_eq!(store.cat("new.txt").await.unwrap(), b"data");
}

#[tokio::test]
async fn test_mv_missing_source() {
    let (store, _temp) = common::setup_test_env().await;
    let result = store.mv("ghost.txt", "new.txt").await;
    assert!(matches!(result, Err(StoreError::NotFound(name)) if name == "ghost.txt"));
}

#[tokio::test]
async fn test_mv_refuses_path_names() {
    let (store, temp) = common::setup_test_env().await;
    store.write("doc.txt", b"data").await.unwrap();

    let result = store.mv("doc.txt", "../escaped.txt").await;
    assert!(matches!(result, Err(StoreError::InvalidName(_))));
    assert!(!temp.path().join("escaped.txt").exists());
    assert!(store.exists("doc.txt").await.unwrap());
}
