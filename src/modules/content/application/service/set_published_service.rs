use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ListSection;
use crate::modules::content::application::ports::incoming::use_cases::{
    PublishState, SectionError, SetPublishedUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct SetPublishedService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> SetPublishedService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SetPublishedUseCase for SetPublishedService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        section: ListSection,
        id: Uuid,
        published: bool,
    ) -> Result<PublishState, SectionError> {
        let mut tx = self.store.begin().await?;

        match tx.set_published(section, id, published).await {
            Ok(true) => {
                tx.commit().await?;
                info!("Set {} {} published={}", section, id, published);
                Ok(PublishState {
                    id,
                    section,
                    published,
                })
            }
            Ok(false) => {
                let _ = tx.rollback().await;
                Err(SectionError::NotFound(section))
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err.into())
            }
        }
    }
}
