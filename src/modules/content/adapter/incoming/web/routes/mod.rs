use actix_web::{web, HttpResponse};
use tracing::{error, warn};

use crate::modules::content::application::domain::entities::{ChildCollection, ListSection};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageChildError, SectionItemError,
};
use crate::shared::api::ApiResponse;

mod create_section_item;
mod delete_section_item;
mod get_portfolio;
mod get_public_project;
mod get_section_item;
mod import_resume;
mod list_section;
mod manage_bullets;
mod manage_skill_items;
mod reorder;
mod set_published;
mod update_contact_settings;
mod update_profile;
mod update_section_item;

// Glob re-exports carry the `__path_*` items utoipa generates next to each handler.
pub use create_section_item::*;
pub use delete_section_item::*;
pub use get_portfolio::*;
pub use get_public_project::*;
pub use get_section_item::*;
pub use import_resume::*;
pub use list_section::*;
pub use manage_bullets::*;
pub use manage_skill_items::*;
pub use reorder::*;
pub use set_published::*;
pub use update_contact_settings::*;
pub use update_profile::*;
pub use update_section_item::*;

/// Registers every content route. Fixed paths go before `{section}` patterns.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(import_resume_handler)
        .service(update_profile_handler)
        .service(update_contact_settings_handler)
        .service(reorder_skill_items_handler)
        .service(add_skill_item_handler)
        .service(update_skill_item_handler)
        .service(remove_skill_item_handler)
        .service(reorder_section_handler)
        .service(add_bullet_handler)
        .service(update_bullet_handler)
        .service(remove_bullet_handler)
        .service(set_published_handler)
        .service(delete_section_item_handler)
        .service(get_section_item_handler)
        .service(update_section_item_handler)
        .service(create_section_item_handler)
        .service(list_section_handler)
        .service(get_portfolio_handler)
        .service(get_public_project_handler);
}

//
// ──────────────────────────────────────────────────────────
// Shared response helpers
// ──────────────────────────────────────────────────────────
//

pub(crate) fn resolve_section(segment: &str) -> Result<ListSection, HttpResponse> {
    ListSection::from_path_segment(segment).ok_or_else(|| {
        warn!("Unknown section path segment '{}'", segment);
        ApiResponse::not_found("SECTION_NOT_FOUND", &format!("Unknown section '{}'", segment))
    })
}

pub(crate) fn section_not_found(section: ListSection) -> HttpResponse {
    let code = match section {
        ListSection::Experience => "EXPERIENCE_NOT_FOUND",
        ListSection::Project => "PROJECT_NOT_FOUND",
        ListSection::Education => "EDUCATION_NOT_FOUND",
        ListSection::Certification => "CERTIFICATION_NOT_FOUND",
        ListSection::SkillCategory => "SKILL_CATEGORY_NOT_FOUND",
    };
    ApiResponse::not_found(code, &format!("{} not found", section.title()))
}

pub(crate) fn child_not_found(collection: ChildCollection) -> HttpResponse {
    let code = match collection {
        ChildCollection::ExperienceBullets | ChildCollection::ProjectBullets => "BULLET_NOT_FOUND",
        ChildCollection::SkillItems => "SKILL_ITEM_NOT_FOUND",
    };
    ApiResponse::not_found(code, &format!("{} not found", collection.title()))
}

pub(crate) fn child_error_response(collection: ChildCollection, err: ManageChildError) -> HttpResponse {
    match err {
        ManageChildError::InvalidContent(e) => {
            warn!("Rejected {}: {}", collection.label(), e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ManageChildError::ParentNotFound(section) => section_not_found(section),
        ManageChildError::ChildNotFound(collection) => child_not_found(collection),
        ManageChildError::RepositoryError(e) => {
            error!("Repository error changing {}: {}", collection.label(), e);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn item_error_response(section: ListSection, err: SectionItemError) -> HttpResponse {
    match err {
        SectionItemError::Validation(e) => {
            warn!("Rejected {}: {}", section, e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        SectionItemError::NotFound(section) => section_not_found(section),
        SectionItemError::SlugConflict(slug) => ApiResponse::conflict(
            "SLUG_CONFLICT",
            &format!("Project slug '{}' is already in use", slug),
        ),
        SectionItemError::RepositoryError(e) => {
            error!("Repository error writing {}: {}", section, e);
            ApiResponse::internal_error()
        }
    }
}

/// Body that does not fit the section's shape.
pub(crate) fn malformed_body(section: ListSection, err: serde_json::Error) -> HttpResponse {
    warn!("Malformed {} body: {}", section, err);
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}
