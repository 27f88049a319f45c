use smint_storage::{RECORD_FILE, SiteStore, StoreError};
use tempfile::TempDir;

async fn store_in(temp: &TempDir) -> SiteStore {
    SiteStore::builder().root(temp.path().join("sites")).connect().await.unwrap()
}

#[tokio::test]
async fn claim_is_exclusive_in_sequence() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    store.claim("my-site").await.unwrap();

    match store.claim("my-site").await {
        Err(StoreError::AlreadyClaimed { name }) => assert_eq!(name, "my-site"),
        other => panic!("expected AlreadyClaimed, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_claims_have_exactly_one_winner() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    let mut handles = Vec::new();
    for _ in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.claim("contested").await }));
    }

    let mut winners = 0;
    let mut losers = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => winners += 1,
            Err(StoreError::AlreadyClaimed { .. }) => losers += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(losers, 31);
    assert!(store.exists("contested").unwrap());
}

#[tokio::test]
async fn record_roundtrip() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    store.claim("my-site").await.unwrap();
    store.write_record("my-site", br#"{"siteName":"my-site"}"#).await.unwrap();

    let data = store.read_record("my-site").await.unwrap();
    assert_eq!(data, br#"{"siteName":"my-site"}"#);

    // No temp litter remains next to the record.
    let entries: Vec<_> = std::fs::read_dir(store.root().join("my-site"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec![RECORD_FILE.to_owned()]);
}

#[tokio::test]
async fn record_write_requires_a_claim() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    let err = store.write_record("ghost", b"{}").await.expect_err("no claim, no record");
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(!store.exists("ghost").unwrap(), "failed write must not materialize a claim");
}

#[tokio::test]
async fn failed_record_write_leaves_claim_consumed() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    store.claim("half-done").await.unwrap();
    // Simulate the record write never happening: the claim must still hold.
    match store.claim("half-done").await {
        Err(StoreError::AlreadyClaimed { .. }) => {},
        other => panic!("claim must survive without a record, got {other:?}"),
    }
    match store.read_record("half-done").await {
        Err(StoreError::RecordNotFound { .. }) => {},
        other => panic!("expected RecordNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unsafe_entry_names_are_rejected() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp).await;

    for name in ["../escape", "a/b", "..", ".", "", ".hidden", "UPPER"] {
        match store.claim(name).await {
            Err(StoreError::InvalidEntryName { .. }) => {},
            other => panic!("{name:?}: expected InvalidEntryName, got {other:?}"),
        }
    }
    assert!(store.exists("../escape").is_err());
}

#[tokio::test]
async fn reconnect_preserves_existing_claims() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("sites");

    {
        let store = SiteStore::builder().root(&root).connect().await.unwrap();
        store.claim("durable").await.unwrap();
    }

    // A fresh connect (with its temp purge) must never treat an empty claim
    // directory as garbage.
    let store = SiteStore::builder().root(&root).connect().await.unwrap();
    assert!(store.exists("durable").unwrap());
    match store.claim("durable").await {
        Err(StoreError::AlreadyClaimed { .. }) => {},
        other => panic!("expected AlreadyClaimed, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_root_without_create_fails() {
    let temp = TempDir::new().unwrap();
    let result =
        SiteStore::builder().create(false).root(temp.path().join("absent")).connect().await;
    assert!(matches!(result, Err(StoreError::Io { .. })));
}
