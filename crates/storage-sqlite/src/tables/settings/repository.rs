use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use lifeplan_core::constants::SETTINGS_DOC_ID;
use lifeplan_core::errors::Result;
use lifeplan_core::settings::{Settings, SettingsRepositoryTrait};

use super::model::SettingsDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::settings_app;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn get_settings(&self) -> Result<Option<Settings>> {
        let mut conn = get_connection(&self.pool)?;
        let doc = settings_app::table
            .find(SETTINGS_DOC_ID)
            .first::<SettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        // A corrupt document reads as absent settings.
        Ok(doc.and_then(|doc| serde_json::from_str(&doc.data).ok()))
    }

    async fn upsert_settings(&self, settings: Settings) -> Result<()> {
        let row = SettingsDB {
            id: SETTINGS_DOC_ID.to_string(),
            data: serde_json::to_string(&settings)?,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.writer
            .exec(move |conn| {
                diesel::replace_into(settings_app::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
