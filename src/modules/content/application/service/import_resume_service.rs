use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{
    Certification, ContactSettings, Education, Experience, ListSection, Profile, Project,
    SkillCategory,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    CertificationImport, ContactSettingsImport, EducationImport, ExperienceImport, ImportCounts,
    ImportResult, ImportResumeError, ImportResumeRequest, ImportResumeUseCase, ProfileImport,
    ProjectImport, SkillCategoryImport,
};
use crate::modules::content::application::ports::outgoing::{ContentStore, ContentTx};

use super::records::{self, ranked};

pub struct ImportResumeService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> ImportResumeService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

//
// ──────────────────────────────────────────────────────────
// Payload -> records
// ──────────────────────────────────────────────────────────
//

fn experiences(imports: Vec<ExperienceImport>) -> Vec<Experience> {
    ranked(imports)
        .map(|(rank, e)| records::experience(e, rank))
        .collect()
}

fn projects(imports: Vec<ProjectImport>) -> Vec<Project> {
    ranked(imports)
        .map(|(rank, p)| records::project(p, rank))
        .collect()
}

fn skill_categories(imports: Vec<SkillCategoryImport>) -> Vec<SkillCategory> {
    ranked(imports)
        .map(|(rank, c)| records::skill_category(c, rank))
        .collect()
}

fn education(imports: Vec<EducationImport>) -> Vec<Education> {
    ranked(imports)
        .map(|(rank, e)| records::education(e, rank))
        .collect()
}

fn certifications(imports: Vec<CertificationImport>) -> Vec<Certification> {
    ranked(imports)
        .map(|(rank, c)| records::certification(c, rank))
        .collect()
}

/// Import never touches the nickname; an existing row keeps its id too.
fn profile(import: ProfileImport, existing: Option<Profile>) -> Profile {
    let (id, nickname) = match existing {
        Some(p) => (p.id, p.nickname),
        None => (Uuid::new_v4(), None),
    };
    Profile {
        id,
        name: import.name,
        title: import.title,
        tagline: import.tagline,
        bio: import.bio,
        avatar_url: import.avatar_url,
        resume_url: import.resume_url,
        email: import.email,
        github_url: import.github_url,
        linkedin_url: import.linkedin_url,
        twitter_url: import.twitter_url,
        nickname,
    }
}

fn contact_settings(
    import: ContactSettingsImport,
    existing: Option<ContactSettings>,
) -> ContactSettings {
    ContactSettings {
        id: existing.map(|c| c.id).unwrap_or_else(Uuid::new_v4),
        email: import.email,
        phone: import.phone,
        location: import.location,
        availability_status: import.availability_status,
        form_enabled: import.form_enabled,
        form_recipient: import.form_recipient,
        success_message: import.success_message,
    }
}

//
// ──────────────────────────────────────────────────────────
// Section writers
// ──────────────────────────────────────────────────────────
//

async fn replace_section<T: ContentTx>(
    tx: &mut T,
    section: ListSection,
) -> Result<(), ImportResumeError> {
    let cleared = tx.clear_section(section).await?;
    if cleared > 0 {
        info!("Import cleared {} existing {} rows", cleared, section);
    }
    Ok(())
}

async fn import_all<T: ContentTx>(
    tx: &mut T,
    request: ImportResumeRequest,
) -> Result<ImportCounts, ImportResumeError> {
    let mut counts = ImportCounts::default();

    if let Some(import) = request.profile {
        let existing = tx.load_profile().await?;
        tx.save_profile(&profile(import, existing)).await?;
        counts.profile_updated = true;
    }

    if let Some(imports) = request.experiences {
        replace_section(tx, ListSection::Experience).await?;
        let records = experiences(imports);
        tx.insert_experiences(&records).await?;
        counts.experiences = records.len();
        counts.experience_bullets = records.iter().map(|e| e.bullets.len()).sum();
    }

    if let Some(imports) = request.projects {
        replace_section(tx, ListSection::Project).await?;
        let records = projects(imports);
        tx.insert_projects(&records).await?;
        counts.projects = records.len();
        counts.project_bullets = records.iter().map(|p| p.bullets.len()).sum();
    }

    if let Some(imports) = request.skill_categories {
        replace_section(tx, ListSection::SkillCategory).await?;
        let records = skill_categories(imports);
        tx.insert_skill_categories(&records).await?;
        counts.skill_categories = records.len();
        counts.skill_items = records.iter().map(|c| c.skills.len()).sum();
    }

    if let Some(imports) = request.education {
        replace_section(tx, ListSection::Education).await?;
        let records = education(imports);
        tx.insert_education(&records).await?;
        counts.education = records.len();
    }

    if let Some(imports) = request.certifications {
        replace_section(tx, ListSection::Certification).await?;
        let records = certifications(imports);
        tx.insert_certifications(&records).await?;
        counts.certifications = records.len();
    }

    if let Some(import) = request.contact_settings {
        let existing = tx.load_contact_settings().await?;
        tx.save_contact_settings(&contact_settings(import, existing))
            .await?;
        counts.contact_settings_updated = true;
    }

    Ok(counts)
}

#[async_trait]
impl<S> ImportResumeUseCase for ImportResumeService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        request: ImportResumeRequest,
    ) -> Result<ImportResult, ImportResumeError> {
        request.validate()?;

        let mut tx = self.store.begin().await?;
        match import_all(&mut tx, request).await {
            Ok(counts) => {
                tx.commit().await?;
                info!(?counts, "Resume import committed");
                Ok(ImportResult::success(counts))
            }
            Err(err) => {
                warn!("Resume import rolled back: {}", err);
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }
}
