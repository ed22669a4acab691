use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::{ContactSettings, Profile};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;
use crate::shared::merge::{is_blank, merge_optional, merge_required};

//
// ──────────────────────────────────────────────────────────
// Merge commands
// ──────────────────────────────────────────────────────────
//
// Only non-null fields are applied. An omitted field and an explicit
// `null` both keep the stored value. Import uses full overwrite instead and
// never goes through these.
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProfileCommand {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateContactSettingsCommand {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub form_enabled: Option<bool>,
    #[serde(default)]
    pub form_recipient: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
}

impl UpdateProfileCommand {
    pub fn validate(&self) -> Result<(), SingletonUpdateError> {
        if is_blank(&self.name) {
            return Err(SingletonUpdateError::Blank("name"));
        }
        if is_blank(&self.title) {
            return Err(SingletonUpdateError::Blank("title"));
        }
        Ok(())
    }

    pub fn merge_into(self, profile: &mut Profile) {
        merge_required(self.name, &mut profile.name);
        merge_required(self.title, &mut profile.title);
        merge_optional(self.tagline, &mut profile.tagline);
        merge_optional(self.bio, &mut profile.bio);
        merge_optional(self.avatar_url, &mut profile.avatar_url);
        merge_optional(self.resume_url, &mut profile.resume_url);
        merge_optional(self.email, &mut profile.email);
        merge_optional(self.github_url, &mut profile.github_url);
        merge_optional(self.linkedin_url, &mut profile.linkedin_url);
        merge_optional(self.twitter_url, &mut profile.twitter_url);
        merge_optional(self.nickname, &mut profile.nickname);
    }
}

impl UpdateContactSettingsCommand {
    pub fn validate(&self) -> Result<(), SingletonUpdateError> {
        if is_blank(&self.email) {
            return Err(SingletonUpdateError::Blank("email"));
        }
        Ok(())
    }

    pub fn merge_into(self, settings: &mut ContactSettings) {
        merge_required(self.email, &mut settings.email);
        merge_optional(self.phone, &mut settings.phone);
        merge_optional(self.location, &mut settings.location);
        merge_optional(self.availability_status, &mut settings.availability_status);
        merge_required(self.form_enabled, &mut settings.form_enabled);
        merge_optional(self.form_recipient, &mut settings.form_recipient);
        merge_optional(self.success_message, &mut settings.success_message);
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SingletonUpdateError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{0} has not been created yet")]
    NotFound(&'static str),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for SingletonUpdateError {
    fn from(err: ContentStoreError) -> Self {
        SingletonUpdateError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<Profile, SingletonUpdateError>;
}

#[async_trait]
pub trait UpdateContactSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateContactSettingsCommand,
    ) -> Result<ContactSettings, SingletonUpdateError>;
}
