use std::slice;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::{
    entities::SectionRecord,
    sort_order::{max_rank, next_append_rank},
};
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateSectionItemUseCase, NewSectionItem, SectionItemError,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

use super::records;

pub struct CreateSectionItemService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> CreateSectionItemService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

async fn append_item<T: ContentTx>(
    tx: &mut T,
    item: NewSectionItem,
) -> Result<SectionRecord, SectionItemError> {
    let section = item.section();
    let ranks = tx.section_ranks(section).await?;
    let rank = next_append_rank(max_rank(ranks.iter().map(|r| r.sort_order)));

    let id: Uuid = match item {
        NewSectionItem::Experience(import) => {
            let record = records::experience(import, rank);
            tx.insert_experiences(slice::from_ref(&record)).await?;
            record.id
        }
        NewSectionItem::Project(import) => {
            let record = records::project(import, rank);
            if tx.project_slug_taken(&record.slug, None).await? {
                return Err(SectionItemError::SlugConflict(record.slug));
            }
            tx.insert_projects(slice::from_ref(&record)).await?;
            record.id
        }
        NewSectionItem::Education(import) => {
            let record = records::education(import, rank);
            tx.insert_education(slice::from_ref(&record)).await?;
            record.id
        }
        NewSectionItem::Certification(import) => {
            let record = records::certification(import, rank);
            tx.insert_certifications(slice::from_ref(&record)).await?;
            record.id
        }
        NewSectionItem::SkillCategory(import) => {
            let record = records::skill_category(import, rank);
            tx.insert_skill_categories(slice::from_ref(&record)).await?;
            record.id
        }
    };

    tx.find_item(section, id)
        .await?
        .ok_or(SectionItemError::NotFound(section))
}

#[async_trait]
impl<S> CreateSectionItemUseCase for CreateSectionItemService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, item: NewSectionItem) -> Result<SectionRecord, SectionItemError> {
        item.validate()?;
        let section = item.section();

        let mut tx = self.store.begin().await?;
        match append_item(&mut tx, item).await {
            Ok(record) => {
                tx.commit().await?;
                info!(
                    "Created {} {} at rank {}",
                    section,
                    record.id(),
                    record.sort_order()
                );
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
