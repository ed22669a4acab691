use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::{
    cascade::ChildList,
    entities::{ChildCollection, ParentRecord},
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageChildError, RemoveChildUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct RemoveChildService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> RemoveChildService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn detach_child<T: ContentTx>(
    tx: &mut T,
    collection: ChildCollection,
    parent_id: Uuid,
    child_id: Uuid,
) -> Result<ParentRecord, ManageChildError> {
    let section = collection.parent();

    let parent = tx
        .find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))?;

    let mut children = ChildList::new(parent.id(), parent.child_rows());
    let removed = children
        .remove(child_id)
        .map_err(|_| ManageChildError::ChildNotFound(collection))?;

    let deleted = tx.delete_children(collection, &[removed.id]).await?;
    if deleted != 1 {
        warn!(
            "Expected to delete one {} {}, deleted {}",
            collection.label(),
            removed.id,
            deleted
        );
        return Err(ManageChildError::ChildNotFound(collection));
    }

    tx.find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))
}

#[async_trait]
impl<S> RemoveChildUseCase for RemoveChildService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<ParentRecord, ManageChildError> {
        let mut tx = self.store.begin().await?;
        match detach_child(&mut tx, collection, parent_id, child_id).await {
            Ok(parent) => {
                tx.commit().await?;
                info!(
                    "Removed {} {} from {} {}",
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
