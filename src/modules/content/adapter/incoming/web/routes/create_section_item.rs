use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Experience;
use crate::modules::content::application::ports::incoming::use_cases::NewSectionItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{item_error_response, malformed_body, resolve_section};

/// Create a row
///
/// The body has the shape of one import entry for the section, children
/// included. The row is ranked after the current last row.
#[utoipa::path(
    post,
    path = "/api/admin/{section}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories")
    ),
    request_body(content = serde_json::Value, description = "ExperienceImport, ProjectImport, EducationImport, CertificationImport or SkillCategoryImport"),
    responses(
        (status = 201, description = "Created row with its children", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Body does not fit the section or fails validation", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 409, description = "Project slug already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/{section}")]
pub async fn create_section_item_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match resolve_section(&path.into_inner()) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let item = match NewSectionItem::from_json(section, req.into_inner()) {
        Ok(item) => item,
        Err(e) => return malformed_body(section, e),
    };

    match data.content.create_item.execute(item).await {
        Ok(record) => ApiResponse::created(record),
        Err(err) => item_error_response(section, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::application::service::create_section_item_service::CreateSectionItemService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_verifier};
    use crate::tests::support::content_fixtures::project;
    use crate::tests::support::in_memory_store::{ContentState, InMemoryContentStore};

    async fn post(store: InMemoryContentStore, uri: &str, payload: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_item(CreateSectionItemService::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_verifier()))
                .service(create_section_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", admin_bearer()))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn creates_project_after_the_last_rank() {
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![project("Blog", 3)],
            ..Default::default()
        });

        let (status, body) = post(
            store.clone(),
            "/api/admin/projects",
            json!({
                "title": "Ray Tracer",
                "featured": true,
                "bullets": [{ "content": "Renders spheres" }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["slug"], "ray-tracer");
        assert_eq!(body["data"]["sort_order"], 4);
        assert_eq!(body["data"]["published"], true);
        assert_eq!(body["data"]["bullets"][0]["content"], "Renders spheres");
        assert_eq!(store.snapshot().projects.len(), 2);
    }

    #[actix_web::test]
    async fn taken_slug_is_a_conflict() {
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![project("Blog", 0)],
            ..Default::default()
        });

        let (status, body) = post(
            store,
            "/api/admin/projects",
            json!({ "title": "Another", "slug": "BLOG" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_CONFLICT");
    }

    #[actix_web::test]
    async fn body_of_another_shape_is_rejected() {
        let store = InMemoryContentStore::default();

        let (status, body) = post(
            store.clone(),
            "/api/admin/education",
            json!({ "title": "Not an education row" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(store.events().is_empty());
    }

    #[actix_web::test]
    async fn blank_required_field_is_rejected() {
        let (status, body) = post(
            InMemoryContentStore::default(),
            "/api/admin/certifications",
            json!({ "name": "", "issuer": "CNCF", "issue_date": "2024-01-01" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "certification.name is required");
    }

    #[actix_web::test]
    async fn unknown_section_is_not_found() {
        let (status, body) = post(
            InMemoryContentStore::default(),
            "/api/admin/hobbies",
            json!({ "name": "Chess" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "SECTION_NOT_FOUND");
    }
}
