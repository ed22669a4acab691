use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{ListSection, SectionItems};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, PortfolioView,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

pub struct GetPortfolioService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetPortfolioService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// All sections are read inside one transaction.
async fn read_portfolio<T: ContentTx>(tx: &mut T) -> Result<PortfolioView, GetPortfolioError> {
    let mut view = PortfolioView {
        profile: tx.load_profile().await?,
        contact: tx.load_contact_settings().await?,
        ..Default::default()
    };

    for section in ListSection::ALL {
        match tx.list_section(section, true).await? {
            SectionItems::Experiences(items) => view.experiences = items,
            SectionItems::Projects(items) => view.projects = items,
            SectionItems::Education(items) => view.education = items,
            SectionItems::Certifications(items) => view.certifications = items,
            SectionItems::SkillCategories(items) => view.skills = items,
        }
    }

    view.featured_projects = view
        .projects
        .iter()
        .filter(|p| p.featured)
        .cloned()
        .collect();

    Ok(view)
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        let mut tx = self.store.begin().await?;
        match read_portfolio(&mut tx).await {
            Ok(view) => {
                tx.commit().await?;
                Ok(view)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::*;
    use crate::tests::support::in_memory_store::{ContentState, InMemoryContentStore};

    #[tokio::test]
    async fn only_published_rows_are_shown_in_rank_order() {
        let mut draft = project("Draft", 0);
        draft.published = false;
        let mut star = project("Star", 2);
        star.featured = true;
        let plain = project("Plain", 1);
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![star.clone(), draft, plain.clone()],
            profiles: vec![profile()],
            ..Default::default()
        });
        let service = GetPortfolioService::new(store);

        let view = service.execute().await.unwrap();

        assert_eq!(view.projects, vec![plain, star.clone()]);
        assert_eq!(view.featured_projects, vec![star]);
        assert!(view.profile.is_some());
        assert!(view.contact.is_none());
    }

    #[tokio::test]
    async fn skill_items_follow_their_ranks() {
        let category = skill_category("Languages", 0, vec![skill("Go", 2), skill("Rust", 1)]);
        let store = InMemoryContentStore::with_state(ContentState {
            skill_categories: vec![category],
            ..Default::default()
        });
        let service = GetPortfolioService::new(store);

        let view = service.execute().await.unwrap();

        let names: Vec<&str> = view.skills[0]
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Go"]);
    }

    #[tokio::test]
    async fn store_error_is_reported() {
        let store = InMemoryContentStore::default().failing_on("load_profile");
        let service = GetPortfolioService::new(store);

        let result = service.execute().await;

        assert!(matches!(result, Err(GetPortfolioError::RepositoryError(_))));
    }
}
