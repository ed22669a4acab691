use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::entities::SectionRecord;
use crate::modules::content::application::ports::incoming::use_cases::{
    SectionItemError, SectionItemPatch, UpdateSectionItemUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct UpdateSectionItemService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> UpdateSectionItemService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn merge_item<T: ContentTx>(
    tx: &mut T,
    id: Uuid,
    patch: SectionItemPatch,
) -> Result<SectionRecord, SectionItemError> {
    let section = patch.section();
    let mut record = tx
        .find_item(section, id)
        .await?
        .ok_or(SectionItemError::NotFound(section))?;

    if let (Some(slug), SectionRecord::Project(current)) = (patch.slug(), &record) {
        if slug != current.slug && tx.project_slug_taken(slug, Some(id)).await? {
            return Err(SectionItemError::SlugConflict(slug.to_string()));
        }
    }

    if !patch.merge_into(&mut record) {
        return Err(SectionItemError::NotFound(section));
    }
    if !tx.update_item(&record).await? {
        return Err(SectionItemError::NotFound(section));
    }

    tx.find_item(section, id)
        .await?
        .ok_or(SectionItemError::NotFound(section))
}

#[async_trait]
impl<S> UpdateSectionItemUseCase for UpdateSectionItemService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: SectionItemPatch,
    ) -> Result<SectionRecord, SectionItemError> {
        patch.validate()?;
        let section = patch.section();

        let mut tx = self.store.begin().await?;
        match merge_item(&mut tx, id, patch).await {
            Ok(record) => {
                tx.commit().await?;
                info!("Updated {} {}", section, id);
                Ok(record)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                if let SectionItemError::SlugConflict(slug) = &err {
                    warn!("Project slug '{}' is already taken", slug);
                }
                Err(err)
            }
        }
    }
}
