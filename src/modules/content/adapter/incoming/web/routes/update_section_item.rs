use actix_web::{patch, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Experience;
use crate::modules::content::application::ports::incoming::use_cases::SectionItemPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{item_error_response, malformed_body, resolve_section};

/// Update a row
///
/// Only non-null fields are applied. Rank and children are left alone.
#[utoipa::path(
    patch,
    path = "/api/admin/{section}/{id}",
    tag = "content",
    params(
        ("section" = String, Path, description = "experience | projects | education | certifications | skill-categories"),
        ("id" = Uuid, Path, description = "Row ID")
    ),
    request_body(content = serde_json::Value, description = "ExperiencePatch, ProjectPatch, EducationPatch, CertificationPatch or SkillCategoryPatch"),
    responses(
        (status = 200, description = "Updated row with its children", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Blank required field or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown section or row", body = ErrorResponse),
        (status = 409, description = "Project slug already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/{section}/{id}")]
pub async fn update_section_item_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    req: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (segment, id) = path.into_inner();
    let section = match resolve_section(&segment) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let patch = match SectionItemPatch::from_json(section, req.into_inner()) {
        Ok(patch) => patch,
        Err(e) => return malformed_body(section, e),
    };

    match data.content.update_item.execute(id, patch).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => item_error_response(section, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::application::service::update_section_item_service::UpdateSectionItemService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_verifier};
    use crate::tests::support::content_fixtures::{bullet, education, project};
    use crate::tests::support::in_memory_store::{ContentState, InMemoryContentStore};

    async fn patch(store: InMemoryContentStore, uri: &str, payload: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_update_item(UpdateSectionItemService::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_verifier()))
                .service(update_section_item_handler),
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
    async fn null_fields_keep_stored_values() {
        let mut edu = education("MIT", 2);
        edu.gpa = Some("3.9".into());
        let store = InMemoryContentStore::with_state(ContentState {
            education: vec![edu.clone()],
            ..Default::default()
        });

        let (status, body) = patch(
            store,
            &format!("/api/admin/education/{}", edu.id),
            json!({ "degree": "MSc", "gpa": null }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["degree"], "MSc");
        assert_eq!(body["data"]["gpa"], "3.9");
        assert_eq!(body["data"]["sort_order"], 2);
    }

    #[actix_web::test]
    async fn project_update_keeps_bullets() {
        let mut proj = project("Blog", 0);
        proj.bullets = vec![bullet("Wrote posts", 1)];
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![proj.clone()],
            ..Default::default()
        });

        let (status, body) = patch(
            store,
            &format!("/api/admin/projects/{}", proj.id),
            json!({ "featured": true }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["featured"], true);
        assert_eq!(body["data"]["bullets"][0]["content"], "Wrote posts");
    }

    #[actix_web::test]
    async fn slug_taken_by_another_project_is_a_conflict() {
        let proj = project("Blog", 0);
        let store = InMemoryContentStore::with_state(ContentState {
            projects: vec![proj.clone(), project("Compiler", 1)],
            ..Default::default()
        });

        let (status, body) = patch(
            store,
            &format!("/api/admin/projects/{}", proj.id),
            json!({ "slug": "compiler" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_CONFLICT");
    }

    #[actix_web::test]
    async fn missing_row_is_not_found() {
        let (status, body) = patch(
            InMemoryContentStore::default(),
            &format!("/api/admin/experience/{}", Uuid::new_v4()),
            json!({ "role": "Lead" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "EXPERIENCE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn wrongly_typed_field_is_rejected() {
        let (status, body) = patch(
            InMemoryContentStore::default(),
            &format!("/api/admin/education/{}", Uuid::new_v4()),
            json!({ "start_year": "twenty" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
