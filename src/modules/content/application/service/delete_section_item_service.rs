use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::ListSection;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteSectionItemUseCase, SectionError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct DeleteSectionItemService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> DeleteSectionItemService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Children go first so no child ever outlives its parent row.
async fn delete_with_children<T: ContentTx>(
    tx: &mut T,
    section: ListSection,
    id: Uuid,
) -> Result<u64, SectionError> {
    if !tx.section_exists(section, id).await? {
        return Err(SectionError::NotFound(section));
    }

    let children = match section.children() {
        Some(collection) => tx.delete_children_of(collection, id).await?,
        None => 0,
    };

    if !tx.delete_section_row(section, id).await? {
        return Err(SectionError::NotFound(section));
    }

    Ok(children)
}

#[async_trait]
impl<S> DeleteSectionItemUseCase for DeleteSectionItemService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, section: ListSection, id: Uuid) -> Result<(), SectionError> {
        let mut tx = self.store.begin().await?;

        match delete_with_children(&mut tx, section, id).await {
            Ok(children) => {
                tx.commit().await?;
                info!("Deleted {} {} with {} children", section, id, children);
                Ok(())
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
