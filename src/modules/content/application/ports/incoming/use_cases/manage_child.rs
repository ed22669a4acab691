use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    ChildCollection, ChildContentError, ListSection, NewChild, ParentRecord,
};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;
use crate::shared::merge::{merge_optional, merge_required};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageChildError {
    #[error(transparent)]
    InvalidContent(#[from] ChildContentError),

    #[error("{} not found", .0.title())]
    ParentNotFound(ListSection),

    #[error("{} not found", .0.title())]
    ChildNotFound(ChildCollection),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for ManageChildError {
    fn from(err: ContentStoreError) -> Self {
        ManageChildError::RepositoryError(err.to_string())
    }
}

/// Append a bullet or skill item to its parent and return the updated parent.
#[async_trait]
pub trait AddChildUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child: NewChild,
    ) -> Result<ParentRecord, ManageChildError>;
}

/// Remove a bullet or skill item from its parent and return the updated parent.
#[async_trait]
pub trait RemoveChildUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<ParentRecord, ManageChildError>;
}

/// Non-null fields replace the child's current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildPatch {
    Bullet {
        content: Option<String>,
    },
    SkillItem {
        name: Option<String>,
        icon_url: Option<String>,
        proficiency: Option<String>,
    },
}

impl ChildPatch {
    /// Merged content, validated the same way as a newly added child.
    pub fn apply(self, current: NewChild) -> Result<NewChild, ChildContentError> {
        match (self, current) {
            (ChildPatch::Bullet { content: update }, NewChild::Bullet { mut content }) => {
                merge_required(update, &mut content);
                NewChild::bullet(content)
            }
            (
                ChildPatch::SkillItem {
                    name: new_name,
                    icon_url: new_icon,
                    proficiency: new_proficiency,
                },
                NewChild::SkillItem {
                    mut name,
                    mut icon_url,
                    mut proficiency,
                },
            ) => {
                merge_required(new_name, &mut name);
                merge_optional(new_icon, &mut icon_url);
                merge_optional(new_proficiency, &mut proficiency);
                NewChild::skill_item(name, icon_url, proficiency)
            }
            (ChildPatch::Bullet { .. }, NewChild::SkillItem { .. }) => {
                Err(ChildContentError::WrongKind("skill item"))
            }
            (ChildPatch::SkillItem { .. }, NewChild::Bullet { .. }) => {
                Err(ChildContentError::WrongKind("bullet"))
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBulletRequest {
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdateBulletRequest> for ChildPatch {
    fn from(req: UpdateBulletRequest) -> Self {
        ChildPatch::Bullet {
            content: req.content,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSkillItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub proficiency: Option<String>,
}

impl From<UpdateSkillItemRequest> for ChildPatch {
    fn from(req: UpdateSkillItemRequest) -> Self {
        ChildPatch::SkillItem {
            name: req.name,
            icon_url: req.icon_url,
            proficiency: req.proficiency,
        }
    }
}

/// Edit one bullet or skill item in place. Rank and parent stay the same.
#[async_trait]
pub trait UpdateChildUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: ChildCollection,
        parent_id: Uuid,
        child_id: Uuid,
        patch: ChildPatch,
    ) -> Result<ParentRecord, ManageChildError>;
}
