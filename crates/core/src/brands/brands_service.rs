//! Brand lifecycle service.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::brands::{
    ArchivedBrand, BrandRepositoryTrait, CurrentBrand, CurrentBrandUpdate, DailyLogEntry,
    LiveBrand, NewCurrentBrand, NewLiveBrand, NewPipelineBrand, PipelineBrand,
    PipelineBrandUpdate, ReorderDirection,
};
use crate::calendar::date_key;
use crate::errors::{Result, ValidationError};

const DEFAULT_CLOSE_REASON: &str = "didn't work out";

/// Drives the one-directional brand lifecycle. Remote-first with local
/// fallback like every domain service; the lifecycle rules themselves are
/// enforced here, not in the repositories.
pub struct BrandService {
    local: Arc<dyn BrandRepositoryTrait>,
    remote: Option<Arc<dyn BrandRepositoryTrait>>,
}

impl BrandService {
    pub fn new(
        local: Arc<dyn BrandRepositoryTrait>,
        remote: Option<Arc<dyn BrandRepositoryTrait>>,
    ) -> Self {
        BrandService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn BrandRepositoryTrait>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(remote) = &self.remote {
            match op(Arc::clone(remote)).await {
                Ok(value) => return Ok(value),
                Err(e) => warn!("remote {} failed, using local store: {}", label, e),
            }
        }
        op(Arc::clone(&self.local)).await
    }

    fn today() -> String {
        date_key(Utc::now().date_naive())
    }

    fn now() -> String {
        Utc::now().to_rfc3339()
    }

    pub async fn current(&self) -> Result<Option<CurrentBrand>> {
        self.run("current-brand query", |repo| async move {
            repo.get_current().await
        })
        .await
    }

    pub async fn pipeline(&self) -> Result<Vec<PipelineBrand>> {
        self.run("pipeline query", |repo| async move {
            repo.list_pipeline().await
        })
        .await
    }

    pub async fn live(&self) -> Result<Vec<LiveBrand>> {
        self.run("live-brand query", |repo| async move { repo.list_live().await })
            .await
    }

    pub async fn archive(&self) -> Result<Vec<ArchivedBrand>> {
        self.run("archive query", |repo| async move {
            repo.list_archive().await
        })
        .await
    }

    /// Starts a fresh current brand at phase 1, replacing any existing one.
    pub async fn save_current(&self, payload: NewCurrentBrand) -> Result<CurrentBrand> {
        let brand = CurrentBrand {
            name: payload.name,
            phase: 1,
            start_date: Self::today(),
            category: payload.category,
            description: payload.description,
            updated_at: Some(Self::now()),
            ..CurrentBrand::default()
        };
        self.persist_current(brand.clone()).await?;
        Ok(brand)
    }

    /// Merges a partial update into the current brand (or a fresh one when
    /// none exists yet).
    pub async fn update_current(&self, update: CurrentBrandUpdate) -> Result<CurrentBrand> {
        let mut brand = self.current().await?.unwrap_or_else(|| CurrentBrand {
            phase: 1,
            start_date: Self::today(),
            ..CurrentBrand::default()
        });
        brand.apply(update);
        brand.updated_at = Some(Self::now());
        self.persist_current(brand.clone()).await?;
        Ok(brand)
    }

    /// Records a daily log line for the current brand; a later write for
    /// the same date overwrites the earlier one. Blank text and a missing
    /// current brand are quiet no-ops.
    pub async fn add_daily_log(&self, text: &str, log_date: Option<String>) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let Some(mut brand) = self.current().await? else {
            return Ok(());
        };
        let key = log_date.unwrap_or_else(Self::today);
        brand.daily_logs.insert(
            key,
            DailyLogEntry {
                text: text.to_string(),
                timestamp: Self::now(),
            },
        );
        self.persist_current(brand).await
    }

    /// Graduates the current brand to a live brand and clears the slot.
    /// A missing current brand is a quiet no-op.
    pub async fn mark_automated(&self) -> Result<Option<LiveBrand>> {
        let Some(current) = self.current().await? else {
            return Ok(None);
        };
        if current.name.is_empty() {
            return Ok(None);
        }

        let live = LiveBrand {
            id: Uuid::new_v4().to_string(),
            name: current.name,
            start_date: Self::today(),
            revenue_log: Default::default(),
            status: "active".to_string(),
            phase: Some(3),
            source: Some("current_brand_transition".to_string()),
            created_at: Self::now(),
        };
        self.run("live-brand insert", |repo| {
            let live = live.clone();
            async move { repo.insert_live(live).await }
        })
        .await?;
        self.run("current-brand clear", |repo| async move {
            repo.clear_current().await
        })
        .await?;
        Ok(Some(live))
    }

    pub async fn add_pipeline(&self, payload: NewPipelineBrand) -> Result<PipelineBrand> {
        let next_order = self
            .pipeline()
            .await?
            .iter()
            .map(|brand| brand.sort_order)
            .max()
            .map_or(1, |max| max + 1);

        let brand = PipelineBrand {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
            category: payload.category,
            planned_start_date: payload.planned_start_date,
            source_idea: payload.source_idea,
            sort_order: next_order,
            created_at: Self::now(),
        };
        self.run("pipeline insert", |repo| {
            let brand = brand.clone();
            async move { repo.insert_pipeline(brand).await }
        })
        .await?;
        Ok(brand)
    }

    pub async fn update_pipeline(&self, id: &str, update: PipelineBrandUpdate) -> Result<()> {
        self.run("pipeline update", |repo| {
            let id = id.to_string();
            let update = update.clone();
            async move { repo.update_pipeline(&id, update).await }
        })
        .await
    }

    pub async fn delete_pipeline(&self, id: &str) -> Result<()> {
        self.run("pipeline delete", |repo| {
            let id = id.to_string();
            async move { repo.delete_pipeline(&id).await }
        })
        .await
    }

    /// Swaps the order field of the brand and its neighbor in the given
    /// direction. Already at the boundary means nothing to do.
    pub async fn reorder_pipeline(&self, id: &str, direction: ReorderDirection) -> Result<()> {
        let brands = self.pipeline().await?;
        let Some(index) = brands.iter().position(|brand| brand.id == id) else {
            return Ok(());
        };
        let swap_index = match direction {
            ReorderDirection::Up => index.checked_sub(1),
            ReorderDirection::Down => Some(index + 1),
        };
        let Some(swap_index) = swap_index.filter(|i| *i < brands.len()) else {
            return Ok(());
        };

        let source = &brands[index];
        let target = &brands[swap_index];
        self.set_pipeline_order(&source.id, target.sort_order).await?;
        self.set_pipeline_order(&target.id, source.sort_order).await
    }

    async fn set_pipeline_order(&self, id: &str, sort_order: i32) -> Result<()> {
        self.update_pipeline(
            id,
            PipelineBrandUpdate {
                sort_order: Some(sort_order),
                ..Default::default()
            },
        )
        .await
    }

    /// Promotes a pipeline entry into the current-brand slot. Rejected
    /// without any state change while a current brand exists.
    pub async fn promote_pipeline(&self, id: &str) -> Result<CurrentBrand> {
        if self.current().await?.is_some() {
            return Err(ValidationError::CurrentBrandExists.into());
        }
        let brand = self
            .pipeline()
            .await?
            .into_iter()
            .find(|brand| brand.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;

        let current = CurrentBrand::from_pipeline(&brand, Self::today());
        self.persist_current(current.clone()).await?;
        self.delete_pipeline(id).await?;
        Ok(current)
    }

    pub async fn add_live(&self, payload: NewLiveBrand) -> Result<LiveBrand> {
        let brand = LiveBrand {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            start_date: payload.start_date.unwrap_or_else(Self::today),
            revenue_log: Default::default(),
            status: "active".to_string(),
            phase: None,
            source: None,
            created_at: Self::now(),
        };
        self.run("live-brand insert", |repo| {
            let brand = brand.clone();
            async move { repo.insert_live(brand).await }
        })
        .await?;
        Ok(brand)
    }

    /// Records the revenue amount for one brand-day. Writing zero is a
    /// recorded fact; it does not remove the entry.
    pub async fn log_revenue(
        &self,
        brand_id: &str,
        amount: Decimal,
        log_date: Option<String>,
    ) -> Result<()> {
        let key = log_date.unwrap_or_else(Self::today);
        self.run("revenue upsert", |repo| {
            let brand_id = brand_id.to_string();
            let key = key.clone();
            async move { repo.set_live_revenue(&brand_id, &key, amount).await }
        })
        .await
    }

    /// Closes a live brand into the archive with its revenue totals.
    pub async fn close_live(&self, brand_id: &str, reason: Option<String>) -> Result<ArchivedBrand> {
        let target = self
            .live()
            .await?
            .into_iter()
            .find(|brand| brand.id == brand_id)
            .ok_or_else(|| ValidationError::MissingRecord(brand_id.to_string()))?;

        let archived = ArchivedBrand {
            id: Uuid::new_v4().to_string(),
            name: target.name.clone(),
            reason: reason.unwrap_or_else(|| DEFAULT_CLOSE_REASON.to_string()),
            closed_date: Self::today(),
            total_revenue: target.total_revenue(),
            summary: format!("{} closed after active run.", target.name),
            created_at: Self::now(),
        };
        self.run("archive insert", |repo| {
            let archived = archived.clone();
            async move { repo.insert_archive(archived).await }
        })
        .await?;
        self.run("live-brand delete", |repo| {
            let brand_id = brand_id.to_string();
            async move { repo.delete_live(&brand_id).await }
        })
        .await?;
        Ok(archived)
    }

    async fn persist_current(&self, brand: CurrentBrand) -> Result<()> {
        self.run("current-brand upsert", |repo| {
            let brand = brand.clone();
            async move { repo.save_current(brand).await }
        })
        .await
    }
}
