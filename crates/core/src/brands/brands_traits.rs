use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::brands::{
    ArchivedBrand, CurrentBrand, LiveBrand, PipelineBrand, PipelineBrandUpdate,
};
use crate::errors::Result;

/// Trait for brand repository operations, covering all four lifecycle
/// collections. `list_pipeline` returns rows ordered by `sort_order`.
#[async_trait]
pub trait BrandRepositoryTrait: Send + Sync {
    async fn get_current(&self) -> Result<Option<CurrentBrand>>;
    async fn save_current(&self, brand: CurrentBrand) -> Result<()>;
    async fn clear_current(&self) -> Result<()>;

    async fn list_pipeline(&self) -> Result<Vec<PipelineBrand>>;
    async fn insert_pipeline(&self, brand: PipelineBrand) -> Result<()>;
    async fn update_pipeline(&self, id: &str, update: PipelineBrandUpdate) -> Result<()>;
    async fn delete_pipeline(&self, id: &str) -> Result<()>;

    async fn list_live(&self) -> Result<Vec<LiveBrand>>;
    async fn insert_live(&self, brand: LiveBrand) -> Result<()>;
    async fn set_live_revenue(&self, id: &str, date_key: &str, amount: Decimal) -> Result<()>;
    async fn delete_live(&self, id: &str) -> Result<()>;

    async fn list_archive(&self) -> Result<Vec<ArchivedBrand>>;
    async fn insert_archive(&self, brand: ArchivedBrand) -> Result<()>;
}
