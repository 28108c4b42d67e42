use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use lifeplan_core::brands::{
    ArchivedBrand, BrandRepositoryTrait, CurrentBrand, LiveBrand, PipelineBrand,
    PipelineBrandUpdate,
};
use lifeplan_core::constants::CURRENT_BRAND_ID;
use lifeplan_core::errors::Result;
use rust_decimal::Decimal;

use super::model::{ArchivedBrandDB, CurrentBrandDB, LiveBrandDB, PipelineBrandDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{brands_archive, brands_current, brands_live, brands_pipeline};

pub struct BrandRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BrandRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BrandRepository { pool, writer }
    }
}

#[async_trait]
impl BrandRepositoryTrait for BrandRepository {
    async fn get_current(&self) -> Result<Option<CurrentBrand>> {
        let mut conn = get_connection(&self.pool)?;
        let doc = brands_current::table
            .find(CURRENT_BRAND_ID)
            .first::<CurrentBrandDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        // A corrupt document reads as no current brand.
        Ok(doc.and_then(|doc| serde_json::from_str(&doc.data).ok()))
    }

    async fn save_current(&self, brand: CurrentBrand) -> Result<()> {
        let row = CurrentBrandDB {
            id: CURRENT_BRAND_ID.to_string(),
            data: serde_json::to_string(&brand)?,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.writer
            .exec(move |conn| {
                diesel::replace_into(brands_current::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn clear_current(&self) -> Result<()> {
        self.writer
            .exec(move |conn| {
                diesel::delete(brands_current::table.find(CURRENT_BRAND_ID))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn list_pipeline(&self) -> Result<Vec<PipelineBrand>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = brands_pipeline::table
            .order(brands_pipeline::sort_order.asc())
            .load::<PipelineBrandDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PipelineBrand::from).collect())
    }

    async fn insert_pipeline(&self, brand: PipelineBrand) -> Result<()> {
        let row = PipelineBrandDB::from(brand);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(brands_pipeline::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn update_pipeline(&self, id: &str, update: PipelineBrandUpdate) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                let row = brands_pipeline::table
                    .find(&id)
                    .first::<PipelineBrandDB>(conn)
                    .map_err(StorageError::from)?;
                let mut brand = PipelineBrand::from(row);
                brand.apply(update);
                diesel::update(brands_pipeline::table.find(&id))
                    .set(&PipelineBrandDB::from(brand))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_pipeline(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(brands_pipeline::table.find(id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn list_live(&self) -> Result<Vec<LiveBrand>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = brands_live::table
            .load::<LiveBrandDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(LiveBrand::from).collect())
    }

    async fn insert_live(&self, brand: LiveBrand) -> Result<()> {
        let row = LiveBrandDB::from(brand);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(brands_live::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn set_live_revenue(&self, id: &str, date_key: &str, amount: Decimal) -> Result<()> {
        let id = id.to_string();
        let date_key = date_key.to_string();
        self.writer
            .exec(move |conn| {
                let row = brands_live::table
                    .find(&id)
                    .first::<LiveBrandDB>(conn)
                    .map_err(StorageError::from)?;
                let mut brand = LiveBrand::from(row);
                brand.revenue_log.insert(date_key, amount);
                diesel::update(brands_live::table.find(&id))
                    .set(&LiveBrandDB::from(brand))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_live(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(brands_live::table.find(id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn list_archive(&self) -> Result<Vec<ArchivedBrand>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = brands_archive::table
            .order(brands_archive::created_at.desc())
            .load::<ArchivedBrandDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ArchivedBrand::from).collect())
    }

    async fn insert_archive(&self, brand: ArchivedBrand) -> Result<()> {
        let row = ArchivedBrandDB::from(brand);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(brands_archive::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
