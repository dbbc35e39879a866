//! Storage layer
//!
//! The word store owns the obscene word dictionary and the suspicious word
//! queue. Classification and moderation talk to it through the [`WordStore`]
//! trait only; the crate ships an in-memory implementation and a
//! SeaORM-backed one.

pub mod database;
pub mod memory;

pub use database::SeaOrmWordStore;
pub use memory::MemoryWordStore;

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::models::{ObsceneWordEntry, SuspiciousWordEntry};
use crate::utils::error::Result;

/// Persistent home of the dictionary and the moderation queue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Looks up a dictionary entry by its original-case value.
    async fn find_obscene_word(&self, value: &str) -> Result<Option<ObsceneWordEntry>>;

    /// Atomic get-or-create by value. The normalized form is refreshed
    /// unconditionally on every call; the cached similarity is left
    /// untouched. Concurrent upserts of the same value must resolve to a
    /// single entry.
    async fn upsert_obscene_word(
        &self,
        value: &str,
        normalized_value: &str,
    ) -> Result<ObsceneWordEntry>;

    /// Ratchets the cached best similarity of an entry: the write applies
    /// only when the stored value is absent or lower than `score`, as one
    /// atomic conditional update. Returns whether a write happened.
    async fn update_best_similarity(&self, id: Uuid, score: f32) -> Result<bool>;

    /// The whole dictionary, in stable creation order.
    async fn all_obscene_words(&self) -> Result<Vec<ObsceneWordEntry>>;

    /// Queues the values as pending suspicious words, silently skipping
    /// values that already exist. Returns the number of newly created
    /// entries.
    async fn bulk_insert_suspicious(&self, values: HashSet<String>) -> Result<u64>;

    /// Looks up a suspicious word by id.
    async fn find_suspicious_word(&self, id: Uuid) -> Result<Option<SuspiciousWordEntry>>;

    /// Persists the mutable fields of an existing suspicious word.
    async fn save_suspicious_word(&self, entry: &SuspiciousWordEntry) -> Result<()>;

    /// Suspicious words still waiting for moderation, oldest first.
    async fn pending_suspicious_words(&self) -> Result<Vec<SuspiciousWordEntry>>;
}
