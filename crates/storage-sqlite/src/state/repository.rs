//! Repositories for the local key-value store and the snapshot document.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use lifeplan_core::errors::Result;
use lifeplan_core::snapshot::StateSnapshot;
use lifeplan_core::store::LocalStoreTrait;

use super::model::{CloudStateDB, LocalStateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{cloud_state, local_state};

/// Fixed id of the single snapshot document, one per deployment.
pub const SNAPSHOT_DOC_ID: &str = "single_user";

/// SQLite implementation of the core local store contract, playing the role
/// browser localStorage plays for the original web client.
pub struct LocalStateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LocalStateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LocalStateRepository { pool, writer }
    }
}

#[async_trait]
impl LocalStoreTrait for LocalStateRepository {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = local_state::table
            .filter(local_state::key.eq(key))
            .select(local_state::value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        let row = LocalStateDB {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.writer
            .exec(move |conn| {
                diesel::replace_into(local_state::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn remove_raw(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(local_state::table.filter(local_state::key.eq(key)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn collect_snapshot(&self) -> Result<StateSnapshot> {
        let mut conn = get_connection(&self.pool)?;
        let rows = local_state::table
            .load::<LocalStateDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .filter(|row| StateSnapshot::is_trackable_key(&row.key))
            .map(|row| (row.key, row.value))
            .collect())
    }

    async fn apply_snapshot(&self, snapshot: &StateSnapshot) -> Result<()> {
        let rows: Vec<LocalStateDB> = snapshot
            .entries
            .iter()
            .filter(|(key, _)| StateSnapshot::is_trackable_key(key))
            .map(|(key, value)| LocalStateDB {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        self.writer
            .exec(move |conn| {
                let prefix = format!("{}%", lifeplan_core::constants::KEY_PREFIX);
                diesel::delete(local_state::table.filter(local_state::key.like(prefix)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                for row in &rows {
                    diesel::replace_into(local_state::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }
}

/// Stores the pushed snapshot as one JSON document, upserted in place.
pub struct CloudStateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CloudStateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CloudStateRepository { pool, writer }
    }

    /// The stored document as `(state_json, updated_at)`, if any.
    pub fn get_document(&self) -> Result<Option<(String, Option<String>)>> {
        let mut conn = get_connection(&self.pool)?;
        let doc = cloud_state::table
            .filter(cloud_state::id.eq(SNAPSHOT_DOC_ID))
            .first::<CloudStateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(doc.map(|doc| (doc.state, doc.updated_at)))
    }

    pub async fn upsert_document(&self, state_json: String, updated_at: String) -> Result<()> {
        let row = CloudStateDB {
            id: SNAPSHOT_DOC_ID.to_string(),
            state: state_json,
            updated_at: Some(updated_at),
        };
        self.writer
            .exec(move |conn| {
                diesel::replace_into(cloud_state::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
