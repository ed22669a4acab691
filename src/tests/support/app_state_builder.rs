use actix_web::web;
use std::sync::Arc;

use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::{
    AddChildUseCase, CreateSectionItemUseCase, DeleteSectionItemUseCase, GetPortfolioUseCase,
    GetPublishedProjectUseCase, GetSectionItemUseCase, ImportResumeUseCase, ListSectionUseCase,
    RemoveChildUseCase, ReorderUseCase, SetPublishedUseCase, UpdateChildUseCase,
    UpdateContactSettingsUseCase, UpdateProfileUseCase, UpdateSectionItemUseCase,
};
use crate::tests::support::stubs::UnusedUseCase;
use crate::AppState;

pub struct TestAppStateBuilder {
    content: ContentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(UnusedUseCase);
        Self {
            content: ContentUseCases {
                reorder: unused.clone(),
                add_child: unused.clone(),
                remove_child: unused.clone(),
                update_child: unused.clone(),
                list_section: unused.clone(),
                create_item: unused.clone(),
                get_item: unused.clone(),
                update_item: unused.clone(),
                set_published: unused.clone(),
                delete_item: unused.clone(),
                import_resume: unused.clone(),
                update_profile: unused.clone(),
                update_contact_settings: unused.clone(),
                get_portfolio: unused.clone(),
                get_public_project: unused,
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_reorder(mut self, uc: impl ReorderUseCase + 'static) -> Self {
        self.content.reorder = Arc::new(uc);
        self
    }

    pub fn with_add_child(mut self, uc: impl AddChildUseCase + 'static) -> Self {
        self.content.add_child = Arc::new(uc);
        self
    }

    pub fn with_remove_child(mut self, uc: impl RemoveChildUseCase + 'static) -> Self {
        self.content.remove_child = Arc::new(uc);
        self
    }

    pub fn with_update_child(mut self, uc: impl UpdateChildUseCase + 'static) -> Self {
        self.content.update_child = Arc::new(uc);
        self
    }

    pub fn with_create_item(mut self, uc: impl CreateSectionItemUseCase + 'static) -> Self {
        self.content.create_item = Arc::new(uc);
        self
    }

    pub fn with_get_item(mut self, uc: impl GetSectionItemUseCase + 'static) -> Self {
        self.content.get_item = Arc::new(uc);
        self
    }

    pub fn with_update_item(mut self, uc: impl UpdateSectionItemUseCase + 'static) -> Self {
        self.content.update_item = Arc::new(uc);
        self
    }

    pub fn with_list_section(mut self, uc: impl ListSectionUseCase + 'static) -> Self {
        self.content.list_section = Arc::new(uc);
        self
    }

    pub fn with_set_published(mut self, uc: impl SetPublishedUseCase + 'static) -> Self {
        self.content.set_published = Arc::new(uc);
        self
    }

    pub fn with_delete_item(mut self, uc: impl DeleteSectionItemUseCase + 'static) -> Self {
        self.content.delete_item = Arc::new(uc);
        self
    }

    pub fn with_import_resume(mut self, uc: impl ImportResumeUseCase + 'static) -> Self {
        self.content.import_resume = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.content.update_profile = Arc::new(uc);
        self
    }

    pub fn with_update_contact_settings(
        mut self,
        uc: impl UpdateContactSettingsUseCase + 'static,
    ) -> Self {
        self.content.update_contact_settings = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(mut self, uc: impl GetPortfolioUseCase + 'static) -> Self {
        self.content.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_get_public_project(
        mut self,
        uc: impl GetPublishedProjectUseCase + 'static,
    ) -> Self {
        self.content.get_public_project = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
        })
    }
}
