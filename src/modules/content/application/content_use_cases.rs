use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    AddChildUseCase, CreateSectionItemUseCase, DeleteSectionItemUseCase, GetPortfolioUseCase,
    GetPublishedProjectUseCase, GetSectionItemUseCase, ImportResumeUseCase, ListSectionUseCase,
    RemoveChildUseCase, ReorderUseCase, SetPublishedUseCase, UpdateChildUseCase,
    UpdateContactSettingsUseCase, UpdateProfileUseCase, UpdateSectionItemUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub reorder: Arc<dyn ReorderUseCase + Send + Sync>,
    pub add_child: Arc<dyn AddChildUseCase + Send + Sync>,
    pub remove_child: Arc<dyn RemoveChildUseCase + Send + Sync>,
    pub update_child: Arc<dyn UpdateChildUseCase + Send + Sync>,
    pub list_section: Arc<dyn ListSectionUseCase + Send + Sync>,
    pub create_item: Arc<dyn CreateSectionItemUseCase + Send + Sync>,
    pub get_item: Arc<dyn GetSectionItemUseCase + Send + Sync>,
    pub update_item: Arc<dyn UpdateSectionItemUseCase + Send + Sync>,
    pub set_published: Arc<dyn SetPublishedUseCase + Send + Sync>,
    pub delete_item: Arc<dyn DeleteSectionItemUseCase + Send + Sync>,
    pub import_resume: Arc<dyn ImportResumeUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub update_contact_settings: Arc<dyn UpdateContactSettingsUseCase + Send + Sync>,
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_public_project: Arc<dyn GetPublishedProjectUseCase + Send + Sync>,
}
