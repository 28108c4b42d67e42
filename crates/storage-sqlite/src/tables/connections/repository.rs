use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use lifeplan_core::connections::{ConnectionLog, ConnectionRepositoryTrait};
use lifeplan_core::errors::Result;

use super::model::ConnectionLogDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::connections;

pub struct ConnectionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ConnectionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ConnectionRepository { pool, writer }
    }
}

#[async_trait]
impl ConnectionRepositoryTrait for ConnectionRepository {
    async fn get_connections(&self, date_key: &str) -> Result<Option<ConnectionLog>> {
        let mut conn = get_connection(&self.pool)?;
        let row = connections::table
            .find(date_key)
            .first::<ConnectionLogDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(ConnectionLogDB::into_log))
    }

    async fn upsert_connections(&self, date_key: &str, log: ConnectionLog) -> Result<()> {
        let row = ConnectionLogDB::from_log(date_key, log);
        self.writer
            .exec(move |conn| {
                diesel::replace_into(connections::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_connections(&self, date_key: &str) -> Result<()> {
        let date_key = date_key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(connections::table.find(date_key))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn connections_range(
        &self,
        date_keys: &[String],
    ) -> Result<BTreeMap<String, ConnectionLog>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = connections::table
            .filter(connections::date.eq_any(date_keys))
            .load::<ConnectionLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|row| (row.date.clone(), row.into_log()))
            .collect())
    }
}
