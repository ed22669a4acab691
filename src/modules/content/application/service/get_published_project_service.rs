use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{ListSection, Project};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetPublishedProjectUseCase, SectionError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct GetPublishedProjectService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetPublishedProjectService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetPublishedProjectUseCase for GetPublishedProjectService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Project, SectionError> {
        let mut tx = self.store.begin().await?;
        match tx.find_project_by_slug(slug, true).await {
            Ok(Some(project)) => {
                tx.commit().await?;
                Ok(project)
            }
            Ok(None) => {
                let _ = tx.rollback().await;
                Err(SectionError::NotFound(ListSection::Project))
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err.into())
            }
        }
    }
}
