use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{ListSection, SectionItems};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListSectionUseCase, SectionError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct ListSectionService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> ListSectionService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListSectionUseCase for ListSectionService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, section: ListSection) -> Result<SectionItems, SectionError> {
        let mut tx = self.store.begin().await?;
        match tx.list_section(section, false).await {
            Ok(items) => {
                tx.commit().await?;
                Ok(items)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err.into())
            }
        }
    }
}
