//! Moderation workflow tests

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use super::*;
use crate::config::FilterConfig;
use crate::core::models::SuspiciousWordStatus;
use crate::services::filter::ObscenityFilterService;
use crate::storage::{MemoryWordStore, WordStore};
use crate::utils::error::FilterError;

async fn moderation_with_pending(words: &[&str]) -> (ModerationService, Arc<MemoryWordStore>) {
    let store = Arc::new(MemoryWordStore::new());
    let filter =
        ObscenityFilterService::new(&FilterConfig::default(), store.clone(), None).unwrap();
    let moderation = ModerationService::new(filter);

    store
        .bulk_insert_suspicious(words.iter().map(|w| (*w).to_owned()).collect::<HashSet<_>>())
        .await
        .unwrap();
    (moderation, store)
}

#[tokio::test]
async fn approving_a_pending_word_adds_it_to_the_dictionary() {
    let (moderation, store) = moderation_with_pending(&["Тапок"]).await;
    let pending = moderation.pending_words().await.unwrap();

    let approved = moderation.approve(pending[0].id).await.unwrap();

    assert_eq!(approved.status, SuspiciousWordStatus::Added);
    let word = store.find_obscene_word("Тапок").await.unwrap().unwrap();
    assert_eq!(word.normalized_value, "tapok");
}

#[tokio::test]
async fn declining_a_pending_word_keeps_the_dictionary_untouched() {
    let (moderation, store) = moderation_with_pending(&["Тапок"]).await;
    let pending = moderation.pending_words().await.unwrap();

    let declined = moderation.decline(pending[0].id).await.unwrap();

    assert_eq!(declined.status, SuspiciousWordStatus::Declined);
    assert!(store.find_obscene_word("Тапок").await.unwrap().is_none());
    assert!(moderation.pending_words().await.unwrap().is_empty());
}

#[tokio::test]
async fn terminal_entries_reject_further_transitions() {
    let (moderation, store) = moderation_with_pending(&["Тапок", "Урок"]).await;
    let pending = moderation.pending_words().await.unwrap();
    let (first, second) = (pending[0].id, pending[1].id);

    moderation.approve(first).await.unwrap();
    moderation.decline(second).await.unwrap();

    for id in [first, second] {
        let approve_err = moderation.approve(id).await.unwrap_err();
        assert!(matches!(approve_err, FilterError::InvalidTransition(_)));
        let decline_err = moderation.decline(id).await.unwrap_err();
        assert!(matches!(decline_err, FilterError::InvalidTransition(_)));
    }

    // The failed transitions changed nothing.
    let first_entry = store.find_suspicious_word(first).await.unwrap().unwrap();
    assert_eq!(first_entry.status, SuspiciousWordStatus::Added);
    let second_entry = store.find_suspicious_word(second).await.unwrap().unwrap();
    assert_eq!(second_entry.status, SuspiciousWordStatus::Declined);
}

#[tokio::test]
async fn moderating_an_unknown_id_is_not_found() {
    let (moderation, _store) = moderation_with_pending(&[]).await;

    let error = moderation.approve(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, FilterError::NotFound(_)));
    let error = moderation.decline(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(error, FilterError::NotFound(_)));
}

#[tokio::test]
async fn approved_words_start_matching_afterwards() {
    let (moderation, store) = moderation_with_pending(&["Тапок"]).await;
    let filter =
        ObscenityFilterService::new(&FilterConfig::default(), store.clone(), None).unwrap();

    assert!(!filter.is_word_obscene("Тапок").await.unwrap());

    let pending = moderation.pending_words().await.unwrap();
    moderation.approve(pending[0].id).await.unwrap();

    assert!(filter.is_word_obscene("Тапок0").await.unwrap());
}
