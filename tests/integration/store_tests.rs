//! Word store contract tests shared by both implementations.

use std::collections::HashSet;
use std::sync::Arc;

use obscenity_rs::WordStore;

async fn contract_upsert_and_ratchet(store: Arc<dyn WordStore>) {
    let created = store.upsert_obscene_word("Банан", "banan").await.unwrap();
    assert!(created.similarity.is_none());

    let updated = store.upsert_obscene_word("Банан", "banan2").await.unwrap();
    assert_eq!(created.id, updated.id);
    assert_eq!(updated.normalized_value, "banan2");

    assert!(store.update_best_similarity(created.id, 0.7).await.unwrap());
    assert!(!store.update_best_similarity(created.id, 0.6).await.unwrap());
    assert!(store.update_best_similarity(created.id, 0.9).await.unwrap());

    let entry = store.find_obscene_word("Банан").await.unwrap().unwrap();
    assert_eq!(entry.similarity, Some(0.9));
    assert_eq!(store.all_obscene_words().await.unwrap().len(), 1);
}

async fn contract_suspicious_queue(store: Arc<dyn WordStore>) {
    let inserted = store
        .bulk_insert_suspicious(HashSet::from(["тапок".to_owned(), "урок".to_owned()]))
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let again = store
        .bulk_insert_suspicious(HashSet::from(["тапок".to_owned()]))
        .await
        .unwrap();
    assert_eq!(again, 0);

    let pending = store.pending_suspicious_words().await.unwrap();
    assert_eq!(pending.len(), 2);

    let found = store.find_suspicious_word(pending[0].id).await.unwrap();
    assert_eq!(found.as_ref(), Some(&pending[0]));
}

#[tokio::test]
async fn memory_store_honors_the_contract() {
    let store: Arc<dyn WordStore> = Arc::new(obscenity_rs::MemoryWordStore::new());
    contract_upsert_and_ratchet(store.clone()).await;
    contract_suspicious_queue(store).await;
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn seaorm_store_honors_the_contract() {
    use obscenity_rs::SeaOrmWordStore;
    use obscenity_rs::config::DatabaseConfig;

    // One connection keeps every query on the same in-memory database.
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_owned(),
        max_connections: 1,
        connection_timeout: 5,
    };
    let store = SeaOrmWordStore::new(&config).await.unwrap();
    store.init_schema().await.unwrap();

    let store: Arc<dyn WordStore> = Arc::new(store);
    contract_upsert_and_ratchet(store.clone()).await;
    contract_suspicious_queue(store).await;
}
