use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Profile;
use crate::modules::content::application::ports::incoming::use_cases::{
    SingletonUpdateError, UpdateProfileCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Merge changes into the profile
///
/// Only non-null fields are applied. Omitted and `null` fields keep their stored value.
#[utoipa::path(
    patch,
    path = "/api/admin/profile",
    tag = "content",
    request_body = UpdateProfileCommand,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Required field set to blank", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Profile has not been created", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/profile")]
pub async fn update_profile_handler(
    _admin: AdminUser,
    req: web::Json<UpdateProfileCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.update_profile.execute(req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(e @ SingletonUpdateError::Blank(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SingletonUpdateError::NotFound(_)) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(SingletonUpdateError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
