use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Experience;
use crate::modules::content::application::ports::incoming::use_cases::SectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{resolve_section, section_not_found};

/// Get one row
///
/// Unpublished rows included. Children are ordered by rank.
#[utoipa::path(
    get,
    path = "/api/admin/{section}/{id}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories"),
        ("id" = Uuid, Path, description = "Row ID")
    ),
    responses(
        (status = 200, description = "The row with its children", body = inline(SuccessResponse<Experience>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section or row", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/{section}/{id}")]
pub async fn get_section_item_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let section = match resolve_section(&segment) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data.content.get_item.execute(section, id).await {
        Ok(record) => ApiResponse::success(record),
        Err(SectionError::NotFound(section)) => section_not_found(section),
        Err(SectionError::RepositoryError(e)) => {
            error!("Repository error reading {} {}: {}", section, id, e);
            ApiResponse::internal_error()
        }
    }
}
