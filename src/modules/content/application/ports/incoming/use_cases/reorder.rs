use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::content::application::domain::{
    entities::{ReorderTarget, SectionItems, SkillCategory},
    reorder_validator::ReorderValidationError,
};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error(transparent)]
    Validation(#[from] ReorderValidationError),

    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for ReorderError {
    fn from(err: ContentStoreError) -> Self {
        ReorderError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Freshly read collection after the new ranks were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReorderResult {
    Items(SectionItems),
    Category(SkillCategory),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReorderUseCase: Send + Sync {
    async fn execute(
        &self,
        target: ReorderTarget,
        ordered_ids: Vec<Uuid>,
    ) -> Result<ReorderResult, ReorderError>;
}
