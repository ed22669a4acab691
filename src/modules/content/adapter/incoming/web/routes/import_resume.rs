use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::{
    ImportResult, ImportResumeError, ImportResumeRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Import a full resume
///
/// Every list section present in the payload replaces the stored section,
/// absent sections are left alone. All writes share one transaction.
#[utoipa::path(
    post,
    path = "/api/admin/import",
    tag = "content",
    request_body = ImportResumeRequest,
    responses(
        (status = 200, description = "Import applied", body = inline(SuccessResponse<ImportResult>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Import completed successfully",
                    "counts": {
                        "experiences": 2, "experience_bullets": 5,
                        "projects": 1, "project_bullets": 2,
                        "skill_categories": 1, "skill_items": 4,
                        "education": 1, "certifications": 0,
                        "profile_updated": true, "contact_settings_updated": false
                    }
                }
            })
        ),
        (status = 400, description = "Payload failed validation", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "experiences[2].company is required" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Project slug already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/import")]
pub async fn import_resume_handler(
    admin: AdminUser,
    req: web::Json<ImportResumeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.import_resume.execute(req.into_inner()).await {
        Ok(result) => ApiResponse::success(result),

        Err(ImportResumeError::Validation(e)) => {
            warn!("Rejected import from admin {}: {}", admin.admin_id, e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ImportResumeError::SlugConflict(slug)) => ApiResponse::conflict(
            "SLUG_CONFLICT",
            &format!("Project slug '{}' is already in use", slug),
        ),

        Err(ImportResumeError::RepositoryError(e)) => {
            error!("Repository error importing resume: {}", e);
            ApiResponse::internal_error()
        }
    }
}
