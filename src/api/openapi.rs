use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::content::adapter::incoming::web::routes::{
    AddBulletRequest, AddSkillItemRequest, ReorderRequest, SetPublishedRequest,
};
use crate::content::application::domain::entities::{
    Bullet, Certification, ContactSettings, Education, Experience, ListSection, Profile, Project,
    SkillCategory, SkillItem,
};
use crate::content::application::ports::incoming::use_cases::{
    BulletImport, CertificationImport, CertificationPatch, ContactSettingsImport, EducationImport,
    EducationPatch, ExperienceImport, ExperiencePatch, ImportCounts, ImportResult,
    ImportResumeRequest, PortfolioView, ProfileImport, ProjectImport, ProjectPatch, PublishState,
    SkillCategoryImport, SkillCategoryPatch, SkillItemImport, UpdateBulletRequest,
    UpdateContactSettingsCommand, UpdateProfileCommand, UpdateSkillItemRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for Portfolio Content Management System",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Admin content endpoints
        crate::content::adapter::incoming::web::routes::list_section_handler,
        crate::content::adapter::incoming::web::routes::create_section_item_handler,
        crate::content::adapter::incoming::web::routes::get_section_item_handler,
        crate::content::adapter::incoming::web::routes::update_section_item_handler,
        crate::content::adapter::incoming::web::routes::reorder_section_handler,
        crate::content::adapter::incoming::web::routes::reorder_skill_items_handler,
        crate::content::adapter::incoming::web::routes::set_published_handler,
        crate::content::adapter::incoming::web::routes::delete_section_item_handler,
        crate::content::adapter::incoming::web::routes::add_bullet_handler,
        crate::content::adapter::incoming::web::routes::update_bullet_handler,
        crate::content::adapter::incoming::web::routes::remove_bullet_handler,
        crate::content::adapter::incoming::web::routes::add_skill_item_handler,
        crate::content::adapter::incoming::web::routes::update_skill_item_handler,
        crate::content::adapter::incoming::web::routes::remove_skill_item_handler,
        crate::content::adapter::incoming::web::routes::import_resume_handler,
        crate::content::adapter::incoming::web::routes::update_profile_handler,
        crate::content::adapter::incoming::web::routes::update_contact_settings_handler,

        // Public endpoints
        crate::content::adapter::incoming::web::routes::get_portfolio_handler,
        crate::content::adapter::incoming::web::routes::get_public_project_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content records
            ListSection,
            Experience,
            Project,
            Education,
            Certification,
            SkillCategory,
            SkillItem,
            Bullet,
            Profile,
            ContactSettings,
            PortfolioView,
            PublishState,

            // Request DTOs
            ReorderRequest,
            SetPublishedRequest,
            AddBulletRequest,
            AddSkillItemRequest,
            UpdateBulletRequest,
            UpdateSkillItemRequest,
            UpdateProfileCommand,
            UpdateContactSettingsCommand,
            ExperiencePatch,
            ProjectPatch,
            EducationPatch,
            CertificationPatch,
            SkillCategoryPatch,

            // Import payload
            ImportResumeRequest,
            ProfileImport,
            ExperienceImport,
            ProjectImport,
            BulletImport,
            SkillCategoryImport,
            SkillItemImport,
            EducationImport,
            CertificationImport,
            ContactSettingsImport,
            ImportResult,
            ImportCounts
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Admin content management endpoints"),
        (name = "public", description = "Public portfolio endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token"))
                        .build(),
                ),
            )
        }
    }
}
