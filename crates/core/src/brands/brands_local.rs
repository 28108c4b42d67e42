//! Key-value backed brand repository (local fallback mode).

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::brands::{
    ArchivedBrand, BrandRepositoryTrait, CurrentBrand, LiveBrand, PipelineBrand,
    PipelineBrandUpdate,
};
use crate::constants::FALLBACK_PREFIX;
use crate::errors::{Result, ValidationError};
use crate::store::LocalStore;

fn current_key() -> String {
    format!("{}:brand:current", FALLBACK_PREFIX)
}

fn pipeline_key() -> String {
    format!("{}:brand:pipeline", FALLBACK_PREFIX)
}

fn live_key() -> String {
    format!("{}:brand:live", FALLBACK_PREFIX)
}

fn archive_key() -> String {
    format!("{}:brand:archive", FALLBACK_PREFIX)
}

/// Each lifecycle collection lives under its own namespaced key; the
/// current brand is a single nullable document.
pub struct LocalBrandRepository {
    store: Arc<LocalStore>,
}

impl LocalBrandRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalBrandRepository { store }
    }
}

#[async_trait]
impl BrandRepositoryTrait for LocalBrandRepository {
    async fn get_current(&self) -> Result<Option<CurrentBrand>> {
        Ok(self.store.read(&current_key(), None))
    }

    async fn save_current(&self, brand: CurrentBrand) -> Result<()> {
        self.store.write(&current_key(), &Some(brand)).await
    }

    async fn clear_current(&self) -> Result<()> {
        self.store
            .write(&current_key(), &None::<CurrentBrand>)
            .await
    }

    async fn list_pipeline(&self) -> Result<Vec<PipelineBrand>> {
        let mut brands: Vec<PipelineBrand> = self.store.read(&pipeline_key(), Vec::new());
        brands.sort_by_key(|brand| brand.sort_order);
        Ok(brands)
    }

    async fn insert_pipeline(&self, brand: PipelineBrand) -> Result<()> {
        let mut brands: Vec<PipelineBrand> = self.store.read(&pipeline_key(), Vec::new());
        brands.push(brand);
        self.store.write(&pipeline_key(), &brands).await
    }

    async fn update_pipeline(&self, id: &str, update: PipelineBrandUpdate) -> Result<()> {
        let mut brands: Vec<PipelineBrand> = self.store.read(&pipeline_key(), Vec::new());
        let brand = brands
            .iter_mut()
            .find(|brand| brand.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;
        brand.apply(update);
        self.store.write(&pipeline_key(), &brands).await
    }

    async fn delete_pipeline(&self, id: &str) -> Result<()> {
        let mut brands: Vec<PipelineBrand> = self.store.read(&pipeline_key(), Vec::new());
        brands.retain(|brand| brand.id != id);
        self.store.write(&pipeline_key(), &brands).await
    }

    async fn list_live(&self) -> Result<Vec<LiveBrand>> {
        Ok(self.store.read(&live_key(), Vec::new()))
    }

    async fn insert_live(&self, brand: LiveBrand) -> Result<()> {
        let mut brands: Vec<LiveBrand> = self.store.read(&live_key(), Vec::new());
        brands.push(brand);
        self.store.write(&live_key(), &brands).await
    }

    async fn set_live_revenue(&self, id: &str, date_key: &str, amount: Decimal) -> Result<()> {
        let mut brands: Vec<LiveBrand> = self.store.read(&live_key(), Vec::new());
        let brand = brands
            .iter_mut()
            .find(|brand| brand.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;
        brand.revenue_log.insert(date_key.to_string(), amount);
        self.store.write(&live_key(), &brands).await
    }

    async fn delete_live(&self, id: &str) -> Result<()> {
        let mut brands: Vec<LiveBrand> = self.store.read(&live_key(), Vec::new());
        brands.retain(|brand| brand.id != id);
        self.store.write(&live_key(), &brands).await
    }

    async fn list_archive(&self) -> Result<Vec<ArchivedBrand>> {
        Ok(self.store.read(&archive_key(), Vec::new()))
    }

    async fn insert_archive(&self, brand: ArchivedBrand) -> Result<()> {
        let mut brands: Vec<ArchivedBrand> = self.store.read(&archive_key(), Vec::new());
        brands.push(brand);
        self.store.write(&archive_key(), &brands).await
    }
}
