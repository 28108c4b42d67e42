use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::Settings;

/// Trait for settings repository operations (single upserted document).
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn get_settings(&self) -> Result<Option<Settings>>;
    async fn upsert_settings(&self, settings: Settings) -> Result<()>;
}
