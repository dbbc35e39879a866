//! Obscene word database model

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::models::ObsceneWordEntry;

/// Obscene word database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "obscene_words")]
pub struct Model {
    /// Entry ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Original-case word value (unique)
    #[sea_orm(unique)]
    pub value: String,

    /// Normalized word value
    pub normalized_value: String,

    /// Best similarity ever recorded during classification
    pub similarity: Option<f32>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the database row to the domain entry
    pub fn to_domain(&self) -> ObsceneWordEntry {
        ObsceneWordEntry {
            id: self.id,
            value: self.value.clone(),
            normalized_value: self.normalized_value.clone(),
            similarity: self.similarity,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        }
    }

    /// Build an insertable row from the domain entry
    pub fn from_domain(entry: &ObsceneWordEntry) -> ActiveModel {
        ActiveModel {
            id: Set(entry.id),
            value: Set(entry.value.clone()),
            normalized_value: Set(entry.normalized_value.clone()),
            similarity: Set(entry.similarity),
            created_at: Set(entry.created_at.into()),
            updated_at: Set(entry.updated_at.into()),
        }
    }
}
