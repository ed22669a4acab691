use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::slug::slugify;
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;

//
// ──────────────────────────────────────────────────────────
// Import payload
// ──────────────────────────────────────────────────────────
//
// A list field that is absent (or null) leaves that section untouched.
// A list field present as `[]` clears the section.
//

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ImportResumeRequest {
    #[serde(default)]
    pub profile: Option<ProfileImport>,
    #[serde(default)]
    pub experiences: Option<Vec<ExperienceImport>>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectImport>>,
    #[serde(default)]
    pub skill_categories: Option<Vec<SkillCategoryImport>>,
    #[serde(default)]
    pub education: Option<Vec<EducationImport>>,
    #[serde(default)]
    pub certifications: Option<Vec<CertificationImport>>,
    #[serde(default)]
    pub contact_settings: Option<ContactSettingsImport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProfileImport {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ExperienceImport {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub company_url: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub bullets: Option<Vec<BulletImport>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProjectImport {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub tech_stack: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub bullets: Option<Vec<BulletImport>>,
}

impl ProjectImport {
    /// Explicit slug as given, otherwise derived from the title.
    pub fn resolved_slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => slugify(&self.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BulletImport {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SkillCategoryImport {
    pub name: String,
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub skills: Option<Vec<SkillItemImport>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SkillItemImport {
    pub name: String,
    pub icon_url: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EducationImport {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CertificationImport {
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub badge_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ContactSettingsImport {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability_status: Option<String>,
    #[serde(default = "default_true")]
    pub form_enabled: bool,
    pub form_recipient: Option<String>,
    pub success_message: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Payload validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} does not produce a usable slug")]
    EmptySlug { field: String },

    #[error("{field} repeats slug '{slug}' already used by {first}")]
    DuplicateSlug {
        field: String,
        slug: String,
        first: String,
    },
}

fn require(field: impl FnOnce() -> String, value: &str) -> Result<(), ImportValidationError> {
    if value.trim().is_empty() {
        return Err(ImportValidationError::Required { field: field() });
    }
    Ok(())
}

impl ExperienceImport {
    /// `at` prefixes every reported field, e.g. `experiences[2]`.
    pub fn validate(&self, at: &str) -> Result<(), ImportValidationError> {
        require(|| format!("{at}.company"), &self.company)?;
        require(|| format!("{at}.role"), &self.role)?;
        for (j, bullet) in self.bullets.iter().flatten().enumerate() {
            require(|| format!("{at}.bullets[{j}].content"), &bullet.content)?;
        }
        Ok(())
    }
}

impl ProjectImport {
    pub fn validate(&self, at: &str) -> Result<(), ImportValidationError> {
        require(|| format!("{at}.title"), &self.title)?;
        if self.resolved_slug().trim().is_empty() {
            return Err(ImportValidationError::EmptySlug {
                field: format!("{at}.slug"),
            });
        }
        for (j, bullet) in self.bullets.iter().flatten().enumerate() {
            require(|| format!("{at}.bullets[{j}].content"), &bullet.content)?;
        }
        Ok(())
    }
}

impl SkillCategoryImport {
    pub fn validate(&self, at: &str) -> Result<(), ImportValidationError> {
        require(|| format!("{at}.name"), &self.name)?;
        for (j, skill) in self.skills.iter().flatten().enumerate() {
            require(|| format!("{at}.skills[{j}].name"), &skill.name)?;
        }
        Ok(())
    }
}

impl EducationImport {
    pub fn validate(&self, at: &str) -> Result<(), ImportValidationError> {
        require(|| format!("{at}.institution"), &self.institution)?;
        require(|| format!("{at}.degree"), &self.degree)
    }
}

impl CertificationImport {
    pub fn validate(&self, at: &str) -> Result<(), ImportValidationError> {
        require(|| format!("{at}.name"), &self.name)?;
        require(|| format!("{at}.issuer"), &self.issuer)
    }
}

impl ImportResumeRequest {
    /// Checks the whole payload before anything is written.
    pub fn validate(&self) -> Result<(), ImportValidationError> {
        if let Some(profile) = &self.profile {
            require(|| "profile.name".into(), &profile.name)?;
            require(|| "profile.title".into(), &profile.title)?;
        }

        for (i, exp) in self.experiences.iter().flatten().enumerate() {
            exp.validate(&format!("experiences[{i}]"))?;
        }

        let mut slugs: HashMap<String, String> = HashMap::new();
        for (i, project) in self.projects.iter().flatten().enumerate() {
            project.validate(&format!("projects[{i}]"))?;

            let slug = project.resolved_slug();
            let field = format!("projects[{i}].slug");
            if let Some(first) = slugs.get(&slug.to_lowercase()) {
                return Err(ImportValidationError::DuplicateSlug {
                    field,
                    slug,
                    first: first.clone(),
                });
            }
            slugs.insert(slug.to_lowercase(), field);
        }

        for (i, category) in self.skill_categories.iter().flatten().enumerate() {
            category.validate(&format!("skill_categories[{i}]"))?;
        }

        for (i, edu) in self.education.iter().flatten().enumerate() {
            edu.validate(&format!("education[{i}]"))?;
        }

        for (i, cert) in self.certifications.iter().flatten().enumerate() {
            cert.validate(&format!("certifications[{i}]"))?;
        }

        if let Some(contact) = &self.contact_settings {
            require(|| "contact_settings.email".into(), &contact.email)?;
        }

        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportCounts {
    pub experiences: usize,
    pub experience_bullets: usize,
    pub projects: usize,
    pub project_bullets: usize,
    pub skill_categories: usize,
    pub skill_items: usize,
    pub education: usize,
    pub certifications: usize,
    pub profile_updated: bool,
    pub contact_settings_updated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportResult {
    pub message: String,
    pub counts: ImportCounts,
}

impl ImportResult {
    pub fn success(counts: ImportCounts) -> Self {
        Self {
            message: "Import completed successfully".to_string(),
            counts,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportResumeError {
    #[error(transparent)]
    Validation(#[from] ImportValidationError),

    #[error("Slug already in use: {0}")]
    SlugConflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for ImportResumeError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::SlugConflict(slug) => ImportResumeError::SlugConflict(slug),
            ContentStoreError::DatabaseError(msg) => ImportResumeError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ImportResumeUseCase: Send + Sync {
    async fn execute(&self, request: ImportResumeRequest)
        -> Result<ImportResult, ImportResumeError>;
}
