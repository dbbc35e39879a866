//! Harvest-then-moderate workflow.

use std::sync::Arc;

use obscenity_rs::config::FilterConfig;
use obscenity_rs::{
    CompletionClient, FilterError, ModerationService, SuspiciousWordStatus, WordStore,
};

use crate::common::fixtures::{FailingCompletionClient, StaticCompletionClient, seeded_filter_with};

fn harvesting_config() -> FilterConfig {
    FilterConfig {
        suspicious_words_check: true,
        ..FilterConfig::default()
    }
}

#[tokio::test]
async fn harvested_words_flow_into_the_dictionary_on_approval() {
    let client: Arc<dyn CompletionClient> = Arc::new(StaticCompletionClient::new(&["тапок", "урок"]));
    let (filter, _store) = seeded_filter_with(&harvesting_config(), Some(client)).await;
    let moderation = ModerationService::new(filter.clone());

    let queued = filter.harvest_suspicious_words("немного текста").await.unwrap();
    assert_eq!(queued, 2);

    let pending = moderation.pending_words().await.unwrap();
    assert_eq!(pending.len(), 2);

    let tapok = pending.iter().find(|e| e.value == "тапок").unwrap();
    let approved = moderation.approve(tapok.id).await.unwrap();
    assert_eq!(approved.status, SuspiciousWordStatus::Added);

    assert!(filter.is_word_obscene("тапок").await.unwrap());
    assert_eq!(moderation.pending_words().await.unwrap().len(), 1);
}

#[tokio::test]
async fn declined_words_never_affect_classification() {
    let client: Arc<dyn CompletionClient> = Arc::new(StaticCompletionClient::new(&["урок"]));
    let (filter, _store) = seeded_filter_with(&harvesting_config(), Some(client)).await;
    let moderation = ModerationService::new(filter.clone());

    filter.harvest_suspicious_words("немного текста").await.unwrap();
    let pending = moderation.pending_words().await.unwrap();

    moderation.decline(pending[0].id).await.unwrap();

    assert!(!filter.is_word_obscene("урок").await.unwrap());
    let error = moderation.approve(pending[0].id).await.unwrap_err();
    assert!(matches!(error, FilterError::InvalidTransition(_)));
}

#[tokio::test]
async fn a_dead_completion_service_leaves_verdicts_intact() {
    let (filter, store) =
        seeded_filter_with(&harvesting_config(), Some(Arc::new(FailingCompletionClient))).await;

    assert!(!filter.is_text_obscene("Помидоры очень вкусные").await.unwrap());
    assert!(filter.is_text_obscene("Бананы очень вкусные").await.unwrap());

    let error = filter.harvest_suspicious_words("текст").await.unwrap_err();
    assert!(matches!(error, FilterError::Completion(_)));
    assert!(store.pending_suspicious_words().await.unwrap().is_empty());
}
