use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use lifeplan_core::errors::Result;
use lifeplan_core::ideas::{Idea, IdeaRepositoryTrait, IdeaUpdate};

use super::model::IdeaDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ideas;

pub struct IdeaRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IdeaRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        IdeaRepository { pool, writer }
    }
}

#[async_trait]
impl IdeaRepositoryTrait for IdeaRepository {
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = ideas::table
            .order(ideas::created_at.desc())
            .load::<IdeaDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Idea::from).collect())
    }

    async fn insert_idea(&self, idea: Idea) -> Result<()> {
        let row = IdeaDB::from(idea);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(ideas::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn update_idea(&self, id: &str, update: IdeaUpdate) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                let row = ideas::table
                    .find(&id)
                    .first::<IdeaDB>(conn)
                    .map_err(StorageError::from)?;
                let mut idea = Idea::from(row);
                idea.apply(update);
                diesel::update(ideas::table.find(&id))
                    .set(&IdeaDB::from(idea))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_idea(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(ideas::table.find(id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
