//! Moderation workflow for harvested suspicious words.
//!
//! Every suspicious word starts out pending and takes exactly one of two
//! transitions, both triggered by a human moderator: approval adds the word
//! to the dictionary, declination drops it. Either way the entry becomes
//! immutable.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::models::{SuspiciousWordEntry, SuspiciousWordStatus};
use crate::services::filter::ObscenityFilterService;
use crate::storage::WordStore;
use crate::utils::error::{FilterError, Result};

/// Drives the pending → added / declined lifecycle of suspicious words.
#[derive(Clone)]
pub struct ModerationService {
    store: Arc<dyn WordStore>,
    filter: ObscenityFilterService,
}

impl ModerationService {
    /// Create a moderation service sharing the filter's word store.
    pub fn new(filter: ObscenityFilterService) -> Self {
        Self {
            store: filter.store(),
            filter,
        }
    }

    /// Approve a pending word: mark it added and materialize it in the
    /// obscene word dictionary.
    pub async fn approve(&self, id: Uuid) -> Result<SuspiciousWordEntry> {
        let entry = self.transition(id, SuspiciousWordStatus::Added).await?;
        self.filter.create_obscene_word(&entry.value).await?;

        info!(word = %entry.value, "suspicious word added to the dictionary");
        Ok(entry)
    }

    /// Decline a pending word. It stays in the store as a record of the
    /// decision but never affects classification.
    pub async fn decline(&self, id: Uuid) -> Result<SuspiciousWordEntry> {
        let entry = self.transition(id, SuspiciousWordStatus::Declined).await?;

        info!(word = %entry.value, "suspicious word declined");
        Ok(entry)
    }

    /// Words still waiting for a decision, oldest first.
    pub async fn pending_words(&self) -> Result<Vec<SuspiciousWordEntry>> {
        self.store.pending_suspicious_words().await
    }

    /// Guarded transition out of the pending state. Terminal entries are
    /// left untouched.
    async fn transition(
        &self,
        id: Uuid,
        target: SuspiciousWordStatus,
    ) -> Result<SuspiciousWordEntry> {
        let Some(mut entry) = self.store.find_suspicious_word(id).await? else {
            return Err(FilterError::not_found(format!(
                "suspicious word {id} does not exist"
            )));
        };

        if entry.status != SuspiciousWordStatus::Pending {
            return Err(FilterError::invalid_transition(format!(
                "suspicious word {:?} is already {}, only pending words can be moderated",
                entry.value, entry.status
            )));
        }

        entry.status = target;
        self.store.save_suspicious_word(&entry).await?;
        Ok(entry)
    }
}

impl fmt::Debug for ModerationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModerationService")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
