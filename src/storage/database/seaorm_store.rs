//! SeaORM-based word store implementation.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Schema,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::entities::{self, obscene_word, suspicious_word};
use crate::config::DatabaseConfig;
use crate::core::models::{ObsceneWordEntry, SuspiciousWordEntry, SuspiciousWordStatus};
use crate::storage::WordStore;
use crate::utils::error::{FilterError, Result};

/// Word store backed by a SQL database through SeaORM.
#[derive(Debug)]
pub struct SeaOrmWordStore {
    db: DatabaseConnection,
}

impl SeaOrmWordStore {
    /// Open a connection pool against the configured database.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(options).await?;

        info!("database connection established");
        Ok(Self { db })
    }

    /// Create the word tables when they do not exist yet. Schema changes
    /// beyond that are the deployment's concern, not the store's.
    pub async fn init_schema(&self) -> Result<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut obscene = schema.create_table_from_entity(entities::ObsceneWord);
        let mut suspicious = schema.create_table_from_entity(entities::SuspiciousWord);

        self.db.execute(backend.build(obscene.if_not_exists())).await?;
        self.db
            .execute(backend.build(suspicious.if_not_exists()))
            .await?;

        debug!("word tables ready");
        Ok(())
    }

    /// The underlying connection, for callers that need to share the pool.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl WordStore for SeaOrmWordStore {
    async fn find_obscene_word(&self, value: &str) -> Result<Option<ObsceneWordEntry>> {
        let model = entities::ObsceneWord::find()
            .filter(obscene_word::Column::Value.eq(value))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn upsert_obscene_word(
        &self,
        value: &str,
        normalized_value: &str,
    ) -> Result<ObsceneWordEntry> {
        let entry = ObsceneWordEntry::new(value, normalized_value);

        entities::ObsceneWord::insert(obscene_word::Model::from_domain(&entry))
            .on_conflict(
                OnConflict::column(obscene_word::Column::Value)
                    .update_columns([
                        obscene_word::Column::NormalizedValue,
                        obscene_word::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        let model = entities::ObsceneWord::find()
            .filter(obscene_word::Column::Value.eq(value))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                FilterError::internal(format!("upserted obscene word {value:?} disappeared"))
            })?;

        Ok(model.to_domain())
    }

    async fn update_best_similarity(&self, id: Uuid, score: f32) -> Result<bool> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let result = entities::ObsceneWord::update_many()
            .col_expr(obscene_word::Column::Similarity, Expr::value(score))
            .col_expr(obscene_word::Column::UpdatedAt, Expr::value(now))
            .filter(obscene_word::Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(obscene_word::Column::Similarity.is_null())
                    .add(obscene_word::Column::Similarity.lt(score)),
            )
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn all_obscene_words(&self) -> Result<Vec<ObsceneWordEntry>> {
        let models = entities::ObsceneWord::find()
            .order_by_asc(obscene_word::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn bulk_insert_suspicious(&self, values: HashSet<String>) -> Result<u64> {
        if values.is_empty() {
            return Ok(0);
        }

        let rows = values
            .into_iter()
            .map(|value| suspicious_word::Model::from_domain(&SuspiciousWordEntry::new(value)));

        let inserted = entities::SuspiciousWord::insert_many(rows)
            .on_conflict(
                OnConflict::column(suspicious_word::Column::Value)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!(inserted, "queued suspicious words");
        Ok(inserted)
    }

    async fn find_suspicious_word(&self, id: Uuid) -> Result<Option<SuspiciousWordEntry>> {
        let model = entities::SuspiciousWord::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.to_domain()))
    }

    async fn save_suspicious_word(&self, entry: &SuspiciousWordEntry) -> Result<()> {
        let model = suspicious_word::ActiveModel {
            id: Set(entry.id),
            status: Set(entry.status.as_i16()),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        entities::SuspiciousWord::update(model)
            .exec(&self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => FilterError::not_found(format!(
                    "suspicious word {} does not exist",
                    entry.id
                )),
                other => other.into(),
            })?;

        Ok(())
    }

    async fn pending_suspicious_words(&self) -> Result<Vec<SuspiciousWordEntry>> {
        let models = entities::SuspiciousWord::find()
            .filter(suspicious_word::Column::Status.eq(SuspiciousWordStatus::Pending.as_i16()))
            .order_by_asc(suspicious_word::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
