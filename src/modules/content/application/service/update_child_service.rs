use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{ChildCollection, ParentRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    ChildPatch, ManageChildError, UpdateChildUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct UpdateChildService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> UpdateChildService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn edit_child<T: ContentTx>(
    tx: &mut T,
    collection: ChildCollection,
    parent_id: Uuid,
    child_id: Uuid,
    patch: ChildPatch,
) -> Result<ParentRecord, ManageChildError> {
    let section = collection.parent();

    let parent = tx
        .find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))?;

    let current = parent
        .child(child_id)
        .ok_or(ManageChildError::ChildNotFound(collection))?;
    let merged = patch.apply(current)?;
    merged.ensure_fits(collection)?;

    if !tx.update_child(collection, child_id, &merged).await? {
        return Err(ManageChildError::ChildNotFound(collection));
    }

    tx.find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))
}

#[async_trait]
impl<S> UpdateChildUseCase for UpdateChildService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child_id: Uuid,
        patch: ChildPatch,
    ) -> Result<ParentRecord, ManageChildError> {
        let mut tx = self.store.begin().await?;
        match edit_child(&mut tx, collection, parent_id, child_id, patch).await {
            Ok(parent) => {
                tx.commit().await?;
                info!(
                    "Updated {} {} of {} {}",
                    collection.label(),
                    child_id,
                    collection.parent(),
                    parent_id
                );
                Ok(parent)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
