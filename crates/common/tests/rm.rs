//! Integration tests for removing documents

mod common;

#[tokio::test]
async fn test_rm_document() {
    let (store, _temp) = common::setup_test_env().await;
    store.write("test.txt", b"").await.unwrap();

    assert!(store.rm("test.txt").await.unwrap());
    assert!(!store.exists("test.txt").await.unwrap());
    assert!(store.names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rm_missing_is_not_an_error() {
    let (store, _temp) = common::setup_test_env().await;
    assert!(!store.rm("test.txt").await.unwrap());
}
