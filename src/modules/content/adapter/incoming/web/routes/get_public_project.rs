use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::entities::{ListSection, Project};
use crate::modules::content::application::ports::incoming::use_cases::SectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::section_not_found;

/// Public project page
///
/// Published projects only, matched on the exact slug.
#[utoipa::path(
    get,
    path = "/api/public/projects/{slug}",
    tag = "public",
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "The project with its bullets", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No published project with this slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/public/projects/{slug}")]
pub async fn get_public_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    match data.content.get_public_project.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(SectionError::NotFound(_)) => section_not_found(ListSection::Project),
        Err(SectionError::RepositoryError(e)) => {
            error!("Repository error reading project '{}': {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
