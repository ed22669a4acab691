use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{ListSection, SectionItems};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("{} not found", .0.title())]
    NotFound(ListSection),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for SectionError {
    fn from(err: ContentStoreError) -> Self {
        SectionError::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublishState {
    pub id: Uuid,
    pub section: ListSection,
    pub published: bool,
}

/// Admin listing: published and unpublished rows, ordered by rank.
#[async_trait]
pub trait ListSectionUseCase: Send + Sync {
    async fn execute(&self, section: ListSection) -> Result<SectionItems, SectionError>;
}

#[async_trait]
pub trait SetPublishedUseCase: Send + Sync {
    async fn execute(
        &self,
        section: ListSection,
        id: Uuid,
        published: bool,
    ) -> Result<PublishState, SectionError>;
}

/// Delete one row together with every child it owns.
#[async_trait]
pub trait DeleteSectionItemUseCase: Send + Sync {
    async fn execute(&self, section: ListSection, id: Uuid) -> Result<(), SectionError>;
}
