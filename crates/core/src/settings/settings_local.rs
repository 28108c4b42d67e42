//! Key-value backed settings repository (local fallback mode).

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::FALLBACK_PREFIX;
use crate::errors::Result;
use crate::settings::{Settings, SettingsRepositoryTrait};
use crate::store::LocalStore;

fn settings_key() -> String {
    format!("{}:settings", FALLBACK_PREFIX)
}

pub struct LocalSettingsRepository {
    store: Arc<LocalStore>,
}

impl LocalSettingsRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalSettingsRepository { store }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for LocalSettingsRepository {
    async fn get_settings(&self) -> Result<Option<Settings>> {
        Ok(self.store.read(&settings_key(), None))
    }

    async fn upsert_settings(&self, settings: Settings) -> Result<()> {
        self.store.write(&settings_key(), &Some(settings)).await
    }
}
