use actix_web::{delete, patch, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{
    ChildCollection, Experience, ListSection, NewChild,
};
use crate::modules::content::application::ports::incoming::use_cases::UpdateBulletRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{child_error_response, resolve_section};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddBulletRequest {
    pub content: String,
}

fn bullet_collection(segment: &str) -> Result<ChildCollection, HttpResponse> {
    match resolve_section(segment)? {
        ListSection::Experience => Ok(ChildCollection::ExperienceBullets),
        ListSection::Project => Ok(ChildCollection::ProjectBullets),
        other => Err(ApiResponse::not_found(
            "SECTION_NOT_FOUND",
            &format!("{} has no bullets", other.title()),
        )),
    }
}

/// Append a bullet
///
/// The bullet is ranked after the current last bullet of its parent.
#[utoipa::path(
    post,
    path = "/api/admin/{section}/{id}/bullets",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects"),
        ("id" = Uuid, Path, description = "Experience or project ID")
    ),
    request_body = AddBulletRequest,
    responses(
        (status = 201, description = "Parent with its bullets", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Parent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/{section}/{id}/bullets")]
pub async fn add_bullet_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    req: web::Json<AddBulletRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, parent_id) = path.into_inner();
    let collection = match bullet_collection(&segment) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };
    let child = match NewChild::bullet(req.into_inner().content) {
        Ok(child) => child,
        Err(e) => return child_error_response(collection, e.into()),
    };

    match data
        .content
        .add_child
        .execute(collection, parent_id, child)
        .await
    {
        Ok(parent) => ApiResponse::created(parent),
        Err(err) => child_error_response(collection, err),
    }
}

/// Remove a bullet
///
/// Remaining bullets keep their ranks.
#[utoipa::path(
    delete,
    path = "/api/admin/{section}/{id}/bullets/{bullet_id}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects"),
        ("id" = Uuid, Path, description = "Experience or project ID"),
        ("bullet_id" = Uuid, Path, description = "Bullet ID")
    ),
    responses(
        (status = 200, description = "Parent with its remaining bullets", body = inline(SuccessResponse<Experience>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Parent or bullet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/{section}/{id}/bullets/{bullet_id}")]
pub async fn remove_bullet_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, parent_id, bullet_id) = path.into_inner();
    let collection = match bullet_collection(&segment) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };

    match data
        .content
        .remove_child
        .execute(collection, parent_id, bullet_id)
        .await
    {
        Ok(parent) => ApiResponse::success(parent),
        Err(err) => child_error_response(collection, err),
    }
}

/// Edit a bullet
///
/// The bullet keeps its id and rank. A `null` content keeps the stored text.
#[utoipa::path(
    patch,
    path = "/api/admin/{section}/{id}/bullets/{bullet_id}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects"),
        ("id" = Uuid, Path, description = "Experience or project ID"),
        ("bullet_id" = Uuid, Path, description = "Bullet ID")
    ),
    request_body = UpdateBulletRequest,
    responses(
        (status = 200, description = "Parent with its bullets", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Parent or bullet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/{section}/{id}/bullets/{bullet_id}")]
pub async fn update_bullet_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid, Uuid)>,
    req: web::Json<UpdateBulletRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, parent_id, bullet_id) = path.into_inner();
    let collection = match bullet_collection(&segment) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };

    match data
        .content
        .update_child
        .execute(collection, parent_id, bullet_id, req.into_inner().into())
        .await
    {
        Ok(parent) => ApiResponse::success(parent),
        Err(err) => child_error_response(collection, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use serde_json::{json, Value};

    use crate::modules::content::application::domain::entities::ParentRecord;
    use crate::modules::content::application::ports::incoming::use_cases::{
        AddChildUseCase, ManageChildError, RemoveChildUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_verifier};
    use crate::modules::content::application::service::update_child_service::UpdateChildService;
    use crate::tests::support::content_fixtures::{bullet, experience, project};
    use crate::tests::support::in_memory_store::{ContentState, InMemoryContentStore};

    mock! {
        pub AddChild {}
        #[async_trait]
        impl AddChildUseCase for AddChild {
            async fn execute(
                &self,
                collection: ChildCollection,
                parent_id: Uuid,
                child: NewChild,
            ) -> Result<ParentRecord, ManageChildError>;
        }
    }

    mock! {
        pub RemoveChild {}
        #[async_trait]
        impl RemoveChildUseCase for RemoveChild {
            async fn execute(
                &self,
                collection: ChildCollection,
                parent_id: Uuid,
                child_id: Uuid,
            ) -> Result<ParentRecord, ManageChildError>;
        }
    }

    async fn post(state: web::Data<AppState>, uri: &str, content: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(add_bullet_handler),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({ "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    async fn delete(state: web::Data<AppState>, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(remove_bullet_handler),
        )
        .await;
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header(("Authorization", admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn adds_trimmed_bullet_to_experience() {
        let mut parent = experience("Acme", 0);
        parent.bullets.push(bullet("Shipped the billing rewrite", 1));
        let parent_id = parent.id;

        let mut mock = MockAddChild::new();
        mock.expect_execute()
            .with(
                eq(ChildCollection::ExperienceBullets),
                eq(parent_id),
                eq(NewChild::Bullet {
                    content: "Shipped the billing rewrite".to_string(),
                }),
            )
            .times(1)
            .returning(move |_, _, _| Ok(ParentRecord::Experience(parent.clone())));
        let state = TestAppStateBuilder::default().with_add_child(mock).build();

        let (status, body) = post(
            state,
            &format!("/api/admin/experience/{}/bullets", parent_id),
            "  Shipped the billing rewrite ",
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["bullets"][0]["sort_order"], 1);
    }

    #[actix_web::test]
    async fn blank_bullet_is_rejected_before_the_use_case() {
        let mut mock = MockAddChild::new();
        mock.expect_execute().times(0);
        let state = TestAppStateBuilder::default().with_add_child(mock).build();

        let (status, body) = post(
            state,
            &format!("/api/admin/projects/{}/bullets", Uuid::new_v4()),
            "   ",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn education_has_no_bullets() {
        let state = TestAppStateBuilder::default().build();

        let (status, body) = post(
            state,
            &format!("/api/admin/education/{}/bullets", Uuid::new_v4()),
            "Dean's list",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "SECTION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn missing_project_is_not_found() {
        let mut mock = MockAddChild::new();
        mock.expect_execute()
            .returning(|_, _, _| Err(ManageChildError::ParentNotFound(ListSection::Project)));
        let state = TestAppStateBuilder::default().with_add_child(mock).build();

        let (status, body) = post(
            state,
            &format!("/api/admin/projects/{}/bullets", Uuid::new_v4()),
            "Added caching",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn removes_bullet_from_project() {
        let parent = project("Compiler", 0);
        let parent_id = parent.id;
        let bullet_id = Uuid::new_v4();

        let mut mock = MockRemoveChild::new();
        mock.expect_execute()
            .with(
                eq(ChildCollection::ProjectBullets),
                eq(parent_id),
                eq(bullet_id),
            )
            .times(1)
            .returning(move |_, _, _| Ok(ParentRecord::Project(parent.clone())));
        let state = TestAppStateBuilder::default().with_remove_child(mock).build();

        let (status, body) = delete(
            state,
            &format!("/api/admin/projects/{}/bullets/{}", parent_id, bullet_id),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], parent_id.to_string());
    }

    #[actix_web::test]
    async fn unknown_bullet_is_not_found() {
        let mut mock = MockRemoveChild::new();
        mock.expect_execute().returning(|_, _, _| {
            Err(ManageChildError::ChildNotFound(
                ChildCollection::ExperienceBullets,
            ))
        });
        let state = TestAppStateBuilder::default().with_remove_child(mock).build();

        let (status, body) = delete(
            state,
            &format!(
                "/api/admin/experience/{}/bullets/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "BULLET_NOT_FOUND");
    }

    async fn patch_bullet(
        store: InMemoryContentStore,
        uri: &str,
        payload: Value,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_update_child(UpdateChildService::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(update_bullet_handler),
        )
        .await;
        let req = test::TestRequest::patch()
            .uri(uri)
            .insert_header(("Authorization", admin_bearer()))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn edits_project_bullet_in_place() {
        let mut parent = project("Compiler", 0);
        parent.bullets = vec![bullet("Parser", 1), bullet("Codegen", 2)];
        let target = parent.bullets[0].id;
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![parent.clone()],
            ..Default::default()
        });

        let (status, body) = patch_bullet(
            store,
            &format!("/api/admin/projects/{}/bullets/{}", parent.id, target),
            json!({ "content": "Hand-written parser" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["bullets"][0]["id"], target.to_string());
        assert_eq!(body["data"]["bullets"][0]["content"], "Hand-written parser");
        assert_eq!(body["data"]["bullets"][0]["sort_order"], 1);
        assert_eq!(body["data"]["bullets"][1]["content"], "Codegen");
    }

    #[actix_web::test]
    async fn blank_bullet_edit_is_rejected() {
        let mut parent = experience("Acme", 0);
        parent.bullets = vec![bullet("Kept", 1)];
        let target = parent.bullets[0].id;
        let store = InMemoryContentStore::with_state(ContentState {
            experiences: vec![parent.clone()],
            ..Default::default()
        });

        let (status, body) = patch_bullet(
            store.clone(),
            &format!("/api/admin/experience/{}/bullets/{}", parent.id, target),
            json!({ "content": " " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(store.snapshot().experiences[0].bullets[0].content, "Kept");
    }

    #[actix_web::test]
    async fn editing_unknown_bullet_is_not_found() {
        let parent = experience("Acme", 0);
        let store = InMemoryContentStore::with_state(ContentState {
            experiences: vec![parent.clone()],
            ..Default::default()
        });

        let (status, body) = patch_bullet(
            store,
            &format!(
                "/api/admin/experience/{}/bullets/{}",
                parent.id,
                Uuid::new_v4()
            ),
            json!({ "content": "x" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "BULLET_NOT_FOUND");
    }
}
