//! Idea capture service.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use crate::errors::Result;
use crate::ideas::{Idea, IdeaRepositoryTrait, IdeaUpdate, NewIdea};

/// Prefers the remote collections backend when one is configured; any remote
/// failure downgrades the operation to the local store instead of surfacing
/// an error (fallback, not retry).
pub struct IdeaService {
    local: Arc<dyn IdeaRepositoryTrait>,
    remote: Option<Arc<dyn IdeaRepositoryTrait>>,
}

impl IdeaService {
    pub fn new(
        local: Arc<dyn IdeaRepositoryTrait>,
        remote: Option<Arc<dyn IdeaRepositoryTrait>>,
    ) -> Self {
        IdeaService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn IdeaRepositoryTrait>) -> Fut,
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

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<Idea>> {
        self.run("idea query", |repo| async move { repo.list_ideas().await })
            .await
    }

    pub async fn create(&self, new_idea: NewIdea) -> Result<Idea> {
        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            text: new_idea.text,
            category: new_idea.category,
            linked_brand: new_idea.linked_brand,
            created_at: Utc::now().to_rfc3339(),
        };
        self.run("idea insert", |repo| {
            let idea = idea.clone();
            async move { repo.insert_idea(idea).await }
        })
        .await?;
        Ok(idea)
    }

    pub async fn update(&self, id: &str, update: IdeaUpdate) -> Result<()> {
        self.run("idea update", |repo| {
            let id = id.to_string();
            let update = update.clone();
            async move { repo.update_idea(&id, update).await }
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.run("idea delete", |repo| {
            let id = id.to_string();
            async move { repo.delete_idea(&id).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};

    fn service() -> IdeaService {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        IdeaService::new(Arc::new(crate::ideas::LocalIdeaRepository::new(store)), None)
    }

    #[tokio::test]
    async fn create_lists_newest_first() {
        let service = service();
        service
            .create(NewIdea {
                text: "older".into(),
                category: "app".into(),
                linked_brand: None,
            })
            .await
            .unwrap();
        service
            .create(NewIdea {
                text: "newer".into(),
                category: "saas".into(),
                linked_brand: Some("Acme".into()),
            })
            .await
            .unwrap();

        let ideas = service.list().await.unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].text, "newer");
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let service = service();
        let idea = service
            .create(NewIdea {
                text: "draft".into(),
                category: "app".into(),
                linked_brand: Some("Acme".into()),
            })
            .await
            .unwrap();

        service
            .update(
                &idea.id,
                IdeaUpdate {
                    text: Some("polished".into()),
                    linked_brand: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let ideas = service.list().await.unwrap();
        assert_eq!(ideas[0].text, "polished");
        assert_eq!(ideas[0].category, "app");
        assert_eq!(ideas[0].linked_brand, None);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let service = service();
        let idea = service
            .create(NewIdea {
                text: "gone".into(),
                category: "app".into(),
                linked_brand: None,
            })
            .await
            .unwrap();
        service.delete(&idea.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
