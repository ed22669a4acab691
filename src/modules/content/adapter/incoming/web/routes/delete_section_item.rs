use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::SectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{resolve_section, section_not_found};

/// Delete a row and everything it owns
///
/// Bullets or skill items of the row are removed in the same transaction.
#[utoipa::path(
    delete,
    path = "/api/admin/{section}/{id}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories"),
        ("id" = Uuid, Path, description = "Row ID")
    ),
    responses(
        (status = 204, description = "Row deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section or row", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/{section}/{id}")]
pub async fn delete_section_item_handler(
    admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let section = match resolve_section(&segment) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data.content.delete_item.execute(section, id).await {
        Ok(()) => {
            info!("Admin {} deleted {} {}", admin.admin_id, section, id);
            ApiResponse::no_content()
        }
        Err(SectionError::NotFound(section)) => section_not_found(section),
        Err(SectionError::RepositoryError(e)) => {
            error!("Repository error deleting {} {}: {}", section, id, e);
            ApiResponse::internal_error()
        }
    }
}
