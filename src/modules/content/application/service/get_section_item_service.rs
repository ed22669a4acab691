use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{ListSection, SectionRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetSectionItemUseCase, SectionError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct GetSectionItemService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetSectionItemService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSectionItemUseCase for GetSectionItemService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        section: ListSection,
        id: Uuid,
    ) -> Result<SectionRecord, SectionError> {
        let mut tx = self.store.begin().await?;
        match tx.find_item(section, id).await {
            Ok(Some(record)) => {
                tx.commit().await?;
                Ok(record)
            }
            Ok(None) => {
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
