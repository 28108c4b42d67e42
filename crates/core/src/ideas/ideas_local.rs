//! Key-value backed idea repository (local fallback mode).

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::FALLBACK_PREFIX;
use crate::errors::{Result, ValidationError};
use crate::ideas::{Idea, IdeaRepositoryTrait, IdeaUpdate};
use crate::store::LocalStore;

fn collection_key() -> String {
    format!("{}:ideas", FALLBACK_PREFIX)
}

/// Stores the whole collection as one JSON array under a namespaced key,
/// newest entry first.
pub struct LocalIdeaRepository {
    store: Arc<LocalStore>,
}

impl LocalIdeaRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalIdeaRepository { store }
    }

    fn load(&self) -> Vec<Idea> {
        self.store.read(&collection_key(), Vec::new())
    }

    async fn save(&self, ideas: &[Idea]) -> Result<()> {
        self.store.write(&collection_key(), &ideas).await
    }
}

#[async_trait]
impl IdeaRepositoryTrait for LocalIdeaRepository {
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        Ok(self.load())
    }

    async fn insert_idea(&self, idea: Idea) -> Result<()> {
        let mut ideas = self.load();
        ideas.insert(0, idea);
        self.save(&ideas).await
    }

    async fn update_idea(&self, id: &str, update: IdeaUpdate) -> Result<()> {
        let mut ideas = self.load();
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;
        idea.apply(update);
        self.save(&ideas).await
    }

    async fn delete_idea(&self, id: &str) -> Result<()> {
        let mut ideas = self.load();
        ideas.retain(|idea| idea.id != id);
        self.save(&ideas).await
    }
}
