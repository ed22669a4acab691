use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{ListSection, SectionRecord};
use crate::modules::content::application::ports::outgoing::content_store::ContentStoreError;
use crate::shared::merge::{is_blank, merge_optional, merge_required};

use super::import_resume::{
    CertificationImport, EducationImport, ExperienceImport, ImportValidationError,
    ProjectImport, SkillCategoryImport,
};
use super::manage_section::SectionError;

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//
// A created row takes the same shape as one import entry, embedded
// children included, and is appended after the current last rank.
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewSectionItem {
    Experience(ExperienceImport),
    Project(ProjectImport),
    Education(EducationImport),
    Certification(CertificationImport),
    SkillCategory(SkillCategoryImport),
}

impl NewSectionItem {
    /// Reads the body shape that belongs to `section`.
    pub fn from_json(
        section: ListSection,
        body: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match section {
            ListSection::Experience => NewSectionItem::Experience(serde_json::from_value(body)?),
            ListSection::Project => NewSectionItem::Project(serde_json::from_value(body)?),
            ListSection::Education => NewSectionItem::Education(serde_json::from_value(body)?),
            ListSection::Certification => {
                NewSectionItem::Certification(serde_json::from_value(body)?)
            }
            ListSection::SkillCategory => {
                NewSectionItem::SkillCategory(serde_json::from_value(body)?)
            }
        })
    }

    pub fn section(&self) -> ListSection {
        match self {
            NewSectionItem::Experience(_) => ListSection::Experience,
            NewSectionItem::Project(_) => ListSection::Project,
            NewSectionItem::Education(_) => ListSection::Education,
            NewSectionItem::Certification(_) => ListSection::Certification,
            NewSectionItem::SkillCategory(_) => ListSection::SkillCategory,
        }
    }

    pub fn validate(&self) -> Result<(), ImportValidationError> {
        match self {
            NewSectionItem::Experience(e) => e.validate("experience"),
            NewSectionItem::Project(p) => p.validate("project"),
            NewSectionItem::Education(e) => e.validate("education"),
            NewSectionItem::Certification(c) => c.validate("certification"),
            NewSectionItem::SkillCategory(c) => c.validate("skill_category"),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//
// Same merge rule as the profile: non-null fields replace, omitted and
// `null` fields keep. Rank and children have their own endpoints and are
// never touched here.
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ExperiencePatch {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: Option<String>,
    /// Changes only when sent. A new title does not re-derive the slug.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SkillCategoryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EducationPatch {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CertificationPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub badge_url: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionItemPatch {
    Experience(ExperiencePatch),
    Project(ProjectPatch),
    Education(EducationPatch),
    Certification(CertificationPatch),
    SkillCategory(SkillCategoryPatch),
}

fn not_blank(field: &str, value: &Option<String>) -> Result<(), ImportValidationError> {
    if is_blank(value) {
        return Err(ImportValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

impl SectionItemPatch {
    pub fn from_json(
        section: ListSection,
        body: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match section {
            ListSection::Experience => SectionItemPatch::Experience(serde_json::from_value(body)?),
            ListSection::Project => SectionItemPatch::Project(serde_json::from_value(body)?),
            ListSection::Education => SectionItemPatch::Education(serde_json::from_value(body)?),
            ListSection::Certification => {
                SectionItemPatch::Certification(serde_json::from_value(body)?)
            }
            ListSection::SkillCategory => {
                SectionItemPatch::SkillCategory(serde_json::from_value(body)?)
            }
        })
    }

    pub fn section(&self) -> ListSection {
        match self {
            SectionItemPatch::Experience(_) => ListSection::Experience,
            SectionItemPatch::Project(_) => ListSection::Project,
            SectionItemPatch::Education(_) => ListSection::Education,
            SectionItemPatch::Certification(_) => ListSection::Certification,
            SectionItemPatch::SkillCategory(_) => ListSection::SkillCategory,
        }
    }

    /// New slug carried by a project patch, if any.
    pub fn slug(&self) -> Option<&str> {
        match self {
            SectionItemPatch::Project(p) => p.slug.as_deref(),
            _ => None,
        }
    }

    /// A present required field may not be blank.
    pub fn validate(&self) -> Result<(), ImportValidationError> {
        match self {
            SectionItemPatch::Experience(p) => {
                not_blank("company", &p.company)?;
                not_blank("role", &p.role)
            }
            SectionItemPatch::Project(p) => {
                not_blank("title", &p.title)?;
                if is_blank(&p.slug) {
                    return Err(ImportValidationError::EmptySlug {
                        field: "slug".to_string(),
                    });
                }
                Ok(())
            }
            SectionItemPatch::Education(p) => {
                not_blank("institution", &p.institution)?;
                not_blank("degree", &p.degree)
            }
            SectionItemPatch::Certification(p) => {
                not_blank("name", &p.name)?;
                not_blank("issuer", &p.issuer)
            }
            SectionItemPatch::SkillCategory(p) => not_blank("name", &p.name),
        }
    }

    /// Applies the patch. Returns false when the record belongs to another section.
    pub fn merge_into(self, record: &mut SectionRecord) -> bool {
        match (self, record) {
            (SectionItemPatch::Experience(p), SectionRecord::Experience(e)) => {
                merge_required(p.company, &mut e.company);
                merge_required(p.role, &mut e.role);
                merge_optional(p.location, &mut e.location);
                merge_optional(p.employment_type, &mut e.employment_type);
                merge_required(p.start_date, &mut e.start_date);
                merge_optional(p.end_date, &mut e.end_date);
                merge_optional(p.description, &mut e.description);
                merge_optional(p.tech_stack, &mut e.tech_stack);
                merge_optional(p.company_url, &mut e.company_url);
                merge_optional(p.logo_url, &mut e.logo_url);
                merge_required(p.published, &mut e.published);
            }
            (SectionItemPatch::Project(p), SectionRecord::Project(project)) => {
                merge_required(p.title, &mut project.title);
                merge_required(p.slug, &mut project.slug);
                merge_optional(p.description, &mut project.description);
                merge_optional(p.long_description, &mut project.long_description);
                merge_optional(p.tech_stack, &mut project.tech_stack);
                merge_optional(p.live_url, &mut project.live_url);
                merge_optional(p.github_url, &mut project.github_url);
                merge_optional(p.image_url, &mut project.image_url);
                merge_optional(p.thumbnail_url, &mut project.thumbnail_url);
                merge_required(p.featured, &mut project.featured);
                merge_required(p.published, &mut project.published);
            }
            (SectionItemPatch::Education(p), SectionRecord::Education(e)) => {
                merge_required(p.institution, &mut e.institution);
                merge_required(p.degree, &mut e.degree);
                merge_optional(p.field_of_study, &mut e.field_of_study);
                merge_optional(p.location, &mut e.location);
                merge_required(p.start_year, &mut e.start_year);
                merge_optional(p.end_year, &mut e.end_year);
                merge_optional(p.gpa, &mut e.gpa);
                merge_optional(p.description, &mut e.description);
                merge_optional(p.logo_url, &mut e.logo_url);
                merge_required(p.published, &mut e.published);
            }
            (SectionItemPatch::Certification(p), SectionRecord::Certification(c)) => {
                merge_required(p.name, &mut c.name);
                merge_required(p.issuer, &mut c.issuer);
                merge_required(p.issue_date, &mut c.issue_date);
                merge_optional(p.expiry_date, &mut c.expiry_date);
                merge_optional(p.credential_id, &mut c.credential_id);
                merge_optional(p.credential_url, &mut c.credential_url);
                merge_optional(p.badge_url, &mut c.badge_url);
                merge_required(p.published, &mut c.published);
            }
            (SectionItemPatch::SkillCategory(p), SectionRecord::SkillCategory(c)) => {
                merge_required(p.name, &mut c.name);
                merge_optional(p.icon, &mut c.icon);
                merge_required(p.published, &mut c.published);
            }
            _ => return false,
        }
        true
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionItemError {
    #[error(transparent)]
    Validation(#[from] ImportValidationError),

    #[error("{} not found", .0.title())]
    NotFound(ListSection),

    #[error("Slug already in use: {0}")]
    SlugConflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentStoreError> for SectionItemError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::SlugConflict(slug) => SectionItemError::SlugConflict(slug),
            ContentStoreError::DatabaseError(msg) => SectionItemError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

/// Append one row, children included, after the current last rank.
#[async_trait]
pub trait CreateSectionItemUseCase: Send + Sync {
    async fn execute(&self, item: NewSectionItem) -> Result<SectionRecord, SectionItemError>;
}

/// One row of a section, published or not.
#[async_trait]
pub trait GetSectionItemUseCase: Send + Sync {
    async fn execute(&self, section: ListSection, id: Uuid)
        -> Result<SectionRecord, SectionError>;
}

#[async_trait]
pub trait UpdateSectionItemUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: SectionItemPatch,
    ) -> Result<SectionRecord, SectionItemError>;
}
