use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::ContactSettings;
use crate::modules::content::application::ports::incoming::use_cases::{
    SingletonUpdateError, UpdateContactSettingsCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Merge changes into the contact settings
#[utoipa::path(
    patch,
    path = "/api/admin/contact-settings",
    tag = "content",
    request_body = UpdateContactSettingsCommand,
    responses(
        (status = 200, description = "Updated contact settings", body = inline(SuccessResponse<ContactSettings>)),
        (status = 400, description = "Email set to blank", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Contact settings have not been created", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/contact-settings")]
pub async fn update_contact_settings_handler(
    _admin: AdminUser,
    req: web::Json<UpdateContactSettingsCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .update_contact_settings
        .execute(req.into_inner())
        .await
    {
        Ok(settings) => ApiResponse::success(settings),

        Err(e @ SingletonUpdateError::Blank(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SingletonUpdateError::NotFound(_)) => ApiResponse::not_found(
            "CONTACT_SETTINGS_NOT_FOUND",
            "Contact settings not found",
        ),

        Err(SingletonUpdateError::RepositoryError(e)) => {
            error!("Repository error updating contact settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
