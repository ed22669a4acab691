use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Experience;
use crate::modules::content::application::ports::incoming::use_cases::SectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{resolve_section, section_not_found};

/// List every row of a section
///
/// Includes unpublished rows. Rows and their children are ordered by rank.
#[utoipa::path(
    get,
    path = "/api/admin/{section}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories")
    ),
    responses(
        (status = 200, description = "Rows of the section ordered by rank", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/{section}")]
pub async fn list_section_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match resolve_section(&path.into_inner()) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data.content.list_section.execute(section).await {
        Ok(items) => ApiResponse::success(items),
        Err(SectionError::NotFound(section)) => section_not_found(section),
        Err(SectionError::RepositoryError(e)) => {
            error!("Repository error listing {}: {}", section, e);
            ApiResponse::internal_error()
        }
    }
}
