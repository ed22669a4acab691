use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{
    Experience, ListSection, ReorderTarget, SkillCategory,
};
use crate::modules::content::application::domain::reorder_validator::ReorderValidationError;
use crate::modules::content::application::ports::incoming::use_cases::ReorderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{resolve_section, section_not_found};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full ordering of a collection, first id gets the lowest rank.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReorderRequest {
    pub ordered_ids: Vec<Uuid>,
}

fn reorder_error_response(target: ReorderTarget, err: ReorderError) -> HttpResponse {
    match err {
        ReorderError::Validation(v) => {
            warn!("Rejected {} reorder: {}", target.label(), v);
            let code = match v {
                ReorderValidationError::EmptyInput { .. } => "EMPTY_ORDER",
                ReorderValidationError::DuplicateIds { .. } => "DUPLICATE_IDS",
                ReorderValidationError::IdSetMismatch { .. } => "INVALID_IDS",
                ReorderValidationError::WrongParent { .. } => "WRONG_PARENT",
            };
            ApiResponse::bad_request(code, &v.to_string())
        }

        ReorderError::CategoryNotFound => section_not_found(ListSection::SkillCategory),

        ReorderError::RepositoryError(e) => {
            error!("Repository error reordering {}: {}", target.label(), e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Reorder a list section
///
/// The body must name every row of the section exactly once.
#[utoipa::path(
    put,
    path = "/api/admin/{section}/reorder",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories")
    ),
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Rows of the section in their new order", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 400, description = "EMPTY_ORDER, DUPLICATE_IDS or INVALID_IDS", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/{section}/reorder")]
pub async fn reorder_section_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match resolve_section(&path.into_inner()) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let target = ReorderTarget::Section(section);

    match data
        .content
        .reorder
        .execute(target, req.into_inner().ordered_ids)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(err) => reorder_error_response(target, err),
    }
}

/// Reorder the skill items of one category
#[utoipa::path(
    put,
    path = "/api/admin/skill-categories/{category_id}/skills/reorder",
    tag = "content",
    params(
        ("category_id" = Uuid, Path, description = "Skill category ID")
    ),
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Category with its skills in the new order", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "EMPTY_ORDER, DUPLICATE_IDS, WRONG_PARENT or INVALID_IDS", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/skill-categories/{category_id}/skills/reorder")]
pub async fn reorder_skill_items_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = ReorderTarget::SkillItems {
        category_id: path.into_inner(),
    };

    match data
        .content
        .reorder
        .execute(target, req.into_inner().ordered_ids)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(err) => reorder_error_response(target, err),
    }
}
