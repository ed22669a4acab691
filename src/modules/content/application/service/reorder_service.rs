use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::content::application::domain::{
    entities::{ChildCollection, ListSection, ParentRecord, ReorderTarget},
    reorder_validator,
    sort_order::{assign_ranks, REORDER_BASE},
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ReorderError, ReorderResult, ReorderUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct ReorderService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> ReorderService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn reorder_section<T: ContentTx>(
    tx: &mut T,
    section: ListSection,
    ordered_ids: &[Uuid],
) -> Result<ReorderResult, ReorderError> {
    let current = tx.section_ranks(section).await?;
    let ordered = reorder_validator::validate(section.label(), ordered_ids, current)?;

    let ids: Vec<Uuid> = ordered.iter().map(|row| row.id).collect();
    tx.update_section_ranks(section, &assign_ranks(&ids, REORDER_BASE))
        .await?;

    let items = tx.list_section(section, false).await?;
    Ok(ReorderResult::Items(items))
}

async fn reorder_skill_items<T: ContentTx>(
    tx: &mut T,
    category_id: Uuid,
    ordered_ids: &[Uuid],
) -> Result<ReorderResult, ReorderError> {
    let collection = ChildCollection::SkillItems;

    if !tx.section_exists(ListSection::SkillCategory, category_id).await? {
        return Err(ReorderError::CategoryNotFound);
    }

    let current = tx.child_rows(collection, category_id).await?;
    let resolved = tx.child_rows_by_ids(collection, ordered_ids).await?;
    let ordered = reorder_validator::validate_scoped(
        collection.label(),
        ordered_ids,
        category_id,
        &resolved,
        current,
    )?;

    let ids: Vec<Uuid> = ordered.iter().map(|row| row.id).collect();
    tx.update_child_ranks(collection, &assign_ranks(&ids, REORDER_BASE))
        .await?;

    match tx.find_parent(ListSection::SkillCategory, category_id).await? {
        Some(ParentRecord::SkillCategory(category)) => Ok(ReorderResult::Category(category)),
        _ => Err(ReorderError::CategoryNotFound),
    }
}

#[async_trait]
impl<S> ReorderUseCase for ReorderService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        target: ReorderTarget,
        ordered_ids: Vec<Uuid>,
    ) -> Result<ReorderResult, ReorderError> {
        let mut tx = self.store.begin().await?;

        let outcome = match target {
            ReorderTarget::Section(section) => {
                reorder_section(&mut tx, section, &ordered_ids).await
            }
            ReorderTarget::SkillItems { category_id } => {
                reorder_skill_items(&mut tx, category_id, &ordered_ids).await
            }
        };

        match outcome {
            Ok(result) => {
                tx.commit().await?;
                info!("Reordered {} {} rows", ordered_ids.len(), target.label());
                Ok(result)
            }
            Err(err) => {
                debug!("Reorder of {} rejected: {}", target.label(), err);
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
