//! Dictionary and moderation entry models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dictionary entry for a known obscene word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsceneWordEntry {
    /// Entry ID (UUID)
    pub id: Uuid,

    /// Original-case word as submitted. Unique within the store.
    pub value: String,

    /// Canonical form used for similarity comparison. Recomputed on every
    /// value change, not required to be unique.
    pub normalized_value: String,

    /// Highest similarity score ever recorded against this entry during
    /// classification, in [0, 1]. `None` until the entry matches for the
    /// first time. Only ever increases.
    pub similarity: Option<f32>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ObsceneWordEntry {
    /// Create a fresh entry with no recorded similarity.
    pub fn new(value: impl Into<String>, normalized_value: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            normalized_value: normalized_value.into(),
            similarity: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for ObsceneWordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Moderation status of a suspicious word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuspiciousWordStatus {
    /// Waiting for a moderator decision.
    #[default]
    Pending,
    /// Approved and added to the dictionary. Terminal.
    Added,
    /// Rejected by a moderator. Terminal.
    Declined,
}

impl SuspiciousWordStatus {
    /// Numeric representation used by the database store.
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Added => 1,
            Self::Declined => 2,
        }
    }

    /// Inverse of [`as_i16`](Self::as_i16).
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            0 => Some(Self::Pending),
            1 => Some(Self::Added),
            2 => Some(Self::Declined),
            _ => None,
        }
    }
}

impl fmt::Display for SuspiciousWordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Added => "added",
            Self::Declined => "declined",
        };
        f.write_str(label)
    }
}

/// A word proposed by the completion service as potentially obscene,
/// queued for human moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousWordEntry {
    /// Entry ID (UUID)
    pub id: Uuid,

    /// Proposed word. Unique within the store; duplicate proposals are
    /// dropped, never overwritten.
    pub value: String,

    /// Moderation status
    pub status: SuspiciousWordStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl SuspiciousWordEntry {
    /// Create a pending entry for a freshly proposed word.
    pub fn new(value: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            status: SuspiciousWordStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for SuspiciousWordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
