use async_trait::async_trait;

use crate::errors::Result;
use crate::ideas::{Idea, IdeaUpdate};

/// Trait for idea repository operations. `list_ideas` returns newest first.
#[async_trait]
pub trait IdeaRepositoryTrait: Send + Sync {
    async fn list_ideas(&self) -> Result<Vec<Idea>>;
    async fn insert_idea(&self, idea: Idea) -> Result<()>;
    async fn update_idea(&self, id: &str, update: IdeaUpdate) -> Result<()>;
    async fn delete_idea(&self, id: &str) -> Result<()>;
}
