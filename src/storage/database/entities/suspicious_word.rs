//! Suspicious word database model

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::{SuspiciousWordEntry, SuspiciousWordStatus};

/// Suspicious word database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suspicious_words")]
pub struct Model {
    /// Entry ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Proposed word value (unique)
    #[sea_orm(unique)]
    pub value: String,

    /// Moderation status (0 pending, 1 added, 2 declined)
    pub status: i16,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the database row to the domain entry. Unknown status values
    /// fall back to pending so a moderator gets to look at the word again.
    pub fn to_domain(&self) -> SuspiciousWordEntry {
        SuspiciousWordEntry {
            id: self.id,
            value: self.value.clone(),
            status: SuspiciousWordStatus::from_i16(self.status).unwrap_or_default(),
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        }
    }

    /// Build an insertable row from the domain entry
    pub fn from_domain(entry: &SuspiciousWordEntry) -> ActiveModel {
        ActiveModel {
            id: Set(entry.id),
            value: Set(entry.value.clone()),
            status: Set(entry.status.as_i16()),
            created_at: Set(entry.created_at.into()),
            updated_at: Set(entry.updated_at.into()),
        }
    }
}
