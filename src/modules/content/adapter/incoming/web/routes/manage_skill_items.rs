use actix_web::{delete, patch, post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{
    ChildCollection, NewChild, SkillCategory,
};
use crate::modules::content::application::ports::incoming::use_cases::UpdateSkillItemRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::child_error_response;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddSkillItemRequest {
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub proficiency: Option<String>,
}

/// Append a skill item to a category
#[utoipa::path(
    post,
    path = "/api/admin/skill-categories/{category_id}/skills",
    tag = "content",
    params(
        ("category_id" = Uuid, Path, description = "Skill category ID")
    ),
    request_body = AddSkillItemRequest,
    responses(
        (status = 201, description = "Category with its skills", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/skill-categories/{category_id}/skills")]
pub async fn add_skill_item_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<AddSkillItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();
    let AddSkillItemRequest {
        name,
        icon_url,
        proficiency,
    } = req.into_inner();
    let child = match NewChild::skill_item(name, icon_url, proficiency) {
        Ok(child) => child,
        Err(e) => return child_error_response(ChildCollection::SkillItems, e.into()),
    };

    match data
        .content
        .add_child
        .execute(ChildCollection::SkillItems, category_id, child)
        .await
    {
        Ok(category) => ApiResponse::created(category),
        Err(err) => child_error_response(ChildCollection::SkillItems, err),
    }
}

/// Remove a skill item from a category
#[utoipa::path(
    delete,
    path = "/api/admin/skill-categories/{category_id}/skills/{item_id}",
    tag = "content",
    params(
        ("category_id" = Uuid, Path, description = "Skill category ID"),
        ("item_id" = Uuid, Path, description = "Skill item ID")
    ),
    responses(
        (status = 200, description = "Category with its remaining skills", body = inline(SuccessResponse<SkillCategory>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Category or item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/skill-categories/{category_id}/skills/{item_id}")]
pub async fn remove_skill_item_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category_id, item_id) = path.into_inner();

    match data
        .content
        .remove_child
        .execute(ChildCollection::SkillItems, category_id, item_id)
        .await
    {
        Ok(category) => ApiResponse::success(category),
        Err(err) => child_error_response(ChildCollection::SkillItems, err),
    }
}

/// Edit a skill item
///
/// Only non-null fields are applied. The item keeps its id and rank.
#[utoipa::path(
    patch,
    path = "/api/admin/skill-categories/{category_id}/skills/{item_id}",
    tag = "content",
    params(
        ("category_id" = Uuid, Path, description = "Skill category ID"),
        ("item_id" = Uuid, Path, description = "Skill item ID")
    ),
    request_body = UpdateSkillItemRequest,
    responses(
        (status = 200, description = "Category with its skills", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Category or skill item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/skill-categories/{category_id}/skills/{item_id}")]
pub async fn update_skill_item_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<UpdateSkillItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category_id, item_id) = path.into_inner();

    match data
        .content
        .update_child
        .execute(
            ChildCollection::SkillItems,
            category_id,
            item_id,
            req.into_inner().into(),
        )
        .await
    {
        Ok(parent) => ApiResponse::success(parent),
        Err(err) => child_error_response(ChildCollection::SkillItems, err),
    }
}
