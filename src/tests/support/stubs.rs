use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    ChildCollection, ContactSettings, ListSection, NewChild, ParentRecord, Profile, Project,
    ReorderTarget, SectionItems, SectionRecord,
};
use crate::modules::content::application::ports::incoming::use_cases::*;

const UNUSED: &str = "not used in this test";

/// Fills every use-case slot a test does not exercise.
#[derive(Clone, Copy, Default)]
pub struct UnusedUseCase;

#[async_trait]
impl ReorderUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _target: ReorderTarget,
        _ordered_ids: Vec<Uuid>,
    ) -> Result<ReorderResult, ReorderError> {
        Err(ReorderError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl AddChildUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _collection: ChildCollection,
        _parent_id: Uuid,
        _child: NewChild,
    ) -> Result<ParentRecord, ManageChildError> {
        Err(ManageChildError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl RemoveChildUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _collection: ChildCollection,
        _parent_id: Uuid,
        _child_id: Uuid,
    ) -> Result<ParentRecord, ManageChildError> {
        Err(ManageChildError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl ListSectionUseCase for UnusedUseCase {
    async fn execute(&self, _section: ListSection) -> Result<SectionItems, SectionError> {
        Err(SectionError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl SetPublishedUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _section: ListSection,
        _id: Uuid,
        _published: bool,
    ) -> Result<PublishState, SectionError> {
        Err(SectionError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl DeleteSectionItemUseCase for UnusedUseCase {
    async fn execute(&self, _section: ListSection, _id: Uuid) -> Result<(), SectionError> {
        Err(SectionError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl ImportResumeUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _request: ImportResumeRequest,
    ) -> Result<ImportResult, ImportResumeError> {
        Err(ImportResumeError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl UpdateProfileUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<Profile, SingletonUpdateError> {
        Err(SingletonUpdateError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl UpdateContactSettingsUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: UpdateContactSettingsCommand,
    ) -> Result<ContactSettings, SingletonUpdateError> {
        Err(SingletonUpdateError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl GetPortfolioUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        Err(GetPortfolioError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl UpdateChildUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _collection: ChildCollection,
        _parent_id: Uuid,
        _child_id: Uuid,
        _patch: ChildPatch,
    ) -> Result<ParentRecord, ManageChildError> {
        Err(ManageChildError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl CreateSectionItemUseCase for UnusedUseCase {
    async fn execute(&self, _item: NewSectionItem) -> Result<SectionRecord, SectionItemError> {
        Err(SectionItemError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl GetSectionItemUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _section: ListSection,
        _id: Uuid,
    ) -> Result<SectionRecord, SectionError> {
        Err(SectionError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl UpdateSectionItemUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _patch: SectionItemPatch,
    ) -> Result<SectionRecord, SectionItemError> {
        Err(SectionItemError::RepositoryError(UNUSED.to_string()))
    }
}

#[async_trait]
impl GetPublishedProjectUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<Project, SectionError> {
        Err(SectionError::RepositoryError(UNUSED.to_string()))
    }
}
