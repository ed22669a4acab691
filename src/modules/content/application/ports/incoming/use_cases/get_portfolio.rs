use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::{
    Certification, ContactSettings, Education, Experience, Profile, Project, SkillCategory,
};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;

use super::manage_section::SectionError;

/// Everything the public site renders, published rows only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PortfolioView {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub featured_projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub contact: Option<ContactSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPortfolioError {

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for GetPortfolioError {
    fn from(err: ContentStoreError) -> Self {
        GetPortfolioError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError>;
}

/// A single published project, looked up by its exact slug.
#[async_trait]
pub trait GetPublishedProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Project, SectionError>;
}
