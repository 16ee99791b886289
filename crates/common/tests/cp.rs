//! Integration tests for duplicating documents

mod common;

use ::common::document::duplicate_name;
use ::common::store::StoreError;

#[tokio::test]
async fn test_cp_to_duplicate_name() {
    let (store, _temp) = common::setup_test_env().await;
    store.write("report.txt", b"quarterly \x00 numbers").await.unwrap();

    let copy = duplicate_name("report.txt");
    store.cp("report.txt", &copy).await.unwrap();

    assert_eq!(copy, "reportcopy.txt");
    assert_eq!(
        store.cat("reportcopy.txt").await.unwrap(),
        b"quarterly \x00 numbers"
    );
    assert!(store.exists("report.txt").await.unwrap());
}

#[tokio::test]
async fn test_cp_twice_overwrites_copy() {
    let (store, _temp) = common::setup_test_env().await;
    store.write("report.txt", b"first").await.unwrap();
    store.cp("report.txt", "reportcopy.txt").await.unwrap();

    store.write("report.txt", b"second").await.unwrap();
    store.cp("report.txt", "reportcopy.txt").await.unwrap();

    assert_eq!(store.cat("reportcopy.txt").await.unwrap(), b"second");
    assert_eq!(store.names().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_cp_missing_source() {
    let (store, _temp) = common::setup_test_env().await;
    let result = store.cp("ghost.txt", "ghostcopy.txt").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
