use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::{
    cascade::ChildList,
    entities::{ChildCollection, NewChild, ParentRecord},
};
use crate::modules::content::application::ports::incoming::use_cases::{
    AddChildUseCase, ManageChildError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct AddChildService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> AddChildService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn append_child<T: ContentTx>(
    tx: &mut T,
    collection: ChildCollection,
    parent_id: Uuid,
    child: &NewChild,
) -> Result<ParentRecord, ManageChildError> {
    let section = collection.parent();

    let parent = tx
        .find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))?;

    let mut children = ChildList::new(parent.id(), parent.child_rows());
    let row = children.add(Uuid::new_v4());
    tx.insert_child(collection, row, child).await?;

    tx.find_parent(section, parent_id)
        .await?
        .ok_or(ManageChildError::ParentNotFound(section))
}

#[async_trait]
impl<S> AddChildUseCase for AddChildService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child: NewChild,
    ) -> Result<ParentRecord, ManageChildError> {
        child.ensure_fits(collection)?;

        let mut tx = self.store.begin().await?;
        match append_child(&mut tx, collection, parent_id, &child).await {
            Ok(parent) => {
                tx.commit().await?;
                info!("Added {} to {} {}", collection.label(), collection.parent(), parent_id);
                Ok(parent)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
