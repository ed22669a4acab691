use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::{
    PublishState, SectionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{resolve_section, section_not_found};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SetPublishedRequest {
    pub published: bool,
}

/// Publish or unpublish a row
///
/// The row keeps its rank either way.
#[utoipa::path(
    patch,
    path = "/api/admin/{section}/{id}/publish",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories"),
        ("id" = Uuid, Path, description = "Row ID")
    ),
    request_body = SetPublishedRequest,
    responses(
        (status = 200, description = "New publish state", body = inline(SuccessResponse<PublishState>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section or row", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/{section}/{id}/publish")]
pub async fn set_published_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    req: web::Json<SetPublishedRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let section = match resolve_section(&segment) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match data
        .content
        .set_published
        .execute(section, id, req.published)
        .await
    {
        Ok(state) => ApiResponse::success(state),
        Err(SectionError::NotFound(section)) => section_not_found(section),
        Err(SectionError::RepositoryError(e)) => {
            error!("Repository error publishing {} {}: {}", section, id, e);
            ApiResponse::internal_error()
        }
    }
}
