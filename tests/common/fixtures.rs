//! Test fixtures: seeded services and stub completion clients.

use std::sync::Arc;

use async_trait::async_trait;

use obscenity_rs::config::FilterConfig;
use obscenity_rs::{
    CompletionClient, FilterError, MemoryWordStore, ObscenityFilterService, Result,
};

/// The dictionary most tests classify against.
pub const SEED_WORDS: [&str; 4] = ["Банан", "Яблоко", "Груша", "Гранат"];

/// A filter service over a fresh in-memory store seeded with [`SEED_WORDS`].
pub async fn seeded_filter() -> (ObscenityFilterService, Arc<MemoryWordStore>) {
    seeded_filter_with(&FilterConfig::default(), None).await
}

/// Same as [`seeded_filter`], with a custom config and optional client.
pub async fn seeded_filter_with(
    config: &FilterConfig,
    completion: Option<Arc<dyn CompletionClient>>,
) -> (ObscenityFilterService, Arc<MemoryWordStore>) {
    let store = Arc::new(MemoryWordStore::new());
    let service = ObscenityFilterService::new(config, store.clone(), completion)
        .expect("test configuration is valid");

    for word in SEED_WORDS {
        service
            .create_obscene_word(word)
            .await
            .expect("seeding an in-memory store cannot fail");
    }
    (service, store)
}

/// Completion client answering every request with a fixed word list.
pub struct StaticCompletionClient {
    words: Vec<String>,
}

impl StaticCompletionClient {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
        }
    }
}

#[async_trait]
impl CompletionClient for StaticCompletionClient {
    async fn propose_suspicious_words(&self, _text: &str) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// Completion client that is always down.
pub struct FailingCompletionClient;

#[async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn propose_suspicious_words(&self, _text: &str) -> Result<Vec<String>> {
        Err(FilterError::completion("completion service unavailable"))
    }
}
