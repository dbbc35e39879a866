//! In-memory word store.
//!
//! Backs tests and embedded setups that do not need durability. Entries are
//! kept in insertion order, which doubles as the dictionary order the
//! similarity ranking relies on.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::core::models::{ObsceneWordEntry, SuspiciousWordEntry, SuspiciousWordStatus};
use crate::storage::WordStore;
use crate::utils::error::{FilterError, Result};

#[derive(Debug, Default)]
struct Inner {
    obscene: Vec<ObsceneWordEntry>,
    suspicious: Vec<SuspiciousWordEntry>,
}

/// Word store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    inner: RwLock<Inner>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn find_obscene_word(&self, value: &str) -> Result<Option<ObsceneWordEntry>> {
        let inner = self.inner.read();
        Ok(inner.obscene.iter().find(|e| e.value == value).cloned())
    }

    async fn upsert_obscene_word(
        &self,
        value: &str,
        normalized_value: &str,
    ) -> Result<ObsceneWordEntry> {
        let mut inner = self.inner.write();

        if let Some(entry) = inner.obscene.iter_mut().find(|e| e.value == value) {
            entry.normalized_value = normalized_value.to_owned();
            entry.updated_at = Utc::now();
            return Ok(entry.clone());
        }

        let entry = ObsceneWordEntry::new(value, normalized_value);
        inner.obscene.push(entry.clone());
        Ok(entry)
    }

    async fn update_best_similarity(&self, id: Uuid, score: f32) -> Result<bool> {
        let mut inner = self.inner.write();

        match inner.obscene.iter_mut().find(|e| e.id == id) {
            Some(entry) if entry.similarity.is_none_or(|best| best < score) => {
                entry.similarity = Some(score);
                entry.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn all_obscene_words(&self) -> Result<Vec<ObsceneWordEntry>> {
        Ok(self.inner.read().obscene.clone())
    }

    async fn bulk_insert_suspicious(&self, values: HashSet<String>) -> Result<u64> {
        let mut inner = self.inner.write();
        let mut inserted = 0;

        for value in values {
            if inner.suspicious.iter().any(|e| e.value == value) {
                continue;
            }
            inner.suspicious.push(SuspiciousWordEntry::new(value));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn find_suspicious_word(&self, id: Uuid) -> Result<Option<SuspiciousWordEntry>> {
        let inner = self.inner.read();
        Ok(inner.suspicious.iter().find(|e| e.id == id).cloned())
    }

    async fn save_suspicious_word(&self, entry: &SuspiciousWordEntry) -> Result<()> {
        let mut inner = self.inner.write();

        let existing = inner
            .suspicious
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| {
                FilterError::not_found(format!("suspicious word {} does not exist", entry.id))
            })?;

        existing.status = entry.status;
        existing.updated_at = Utc::now();
        Ok(())
    }

    async fn pending_suspicious_words(&self) -> Result<Vec<SuspiciousWordEntry>> {
        let inner = self.inner.read();
        Ok(inner
            .suspicious
            .iter()
            .filter(|e| e.status == SuspiciousWordStatus::Pending)
            .cloned()
            .collect())
    }
}
