pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::content;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::content::adapter::outgoing::ContentStorePostgres;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::service::{
    add_child_service::AddChildService, create_section_item_service::CreateSectionItemService,
    delete_section_item_service::DeleteSectionItemService,
    get_portfolio_service::GetPortfolioService,
    get_published_project_service::GetPublishedProjectService,
    get_section_item_service::GetSectionItemService, import_resume_service::ImportResumeService,
    list_section_service::ListSectionService, remove_child_service::RemoveChildService,
    reorder_service::ReorderService, set_published_service::SetPublishedService,
    update_child_service::UpdateChildService,
    update_contact_settings_service::UpdateContactSettingsService,
    update_profile_service::UpdateProfileService,
    update_section_item_service::UpdateSectionItemService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
}

fn content_use_cases(store: ContentStorePostgres) -> ContentUseCases {
    ContentUseCases {
        reorder: Arc::new(ReorderService::new(store.clone())),
        add_child: Arc::new(AddChildService::new(store.clone())),
        remove_child: Arc::new(RemoveChildService::new(store.clone())),
        update_child: Arc::new(UpdateChildService::new(store.clone())),
        list_section: Arc::new(ListSectionService::new(store.clone())),
        create_item: Arc::new(CreateSectionItemService::new(store.clone())),
        get_item: Arc::new(GetSectionItemService::new(store.clone())),
        update_item: Arc::new(UpdateSectionItemService::new(store.clone())),
        set_published: Arc::new(SetPublishedService::new(store.clone())),
        delete_item: Arc::new(DeleteSectionItemService::new(store.clone())),
        import_resume: Arc::new(ImportResumeService::new(store.clone())),
        update_profile: Arc::new(UpdateProfileService::new(store.clone())),
        update_contact_settings: Arc::new(UpdateContactSettingsService::new(store.clone())),
        get_portfolio: Arc::new(GetPortfolioService::new(store.clone())),
        get_public_project: Arc::new(GetPublishedProjectService::new(store)),
    }
}

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(startup_error)?;
    let jwt_config = JwtConfig::from_env().map_err(startup_error)?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(startup_error)?;
    let db_arc = Arc::new(conn);

    let state = AppState {
        content: content_use_cases(ContentStorePostgres::new(Arc::clone(&db_arc))),
    };
    let token_verifier_arc: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let openapi = api::openapi::ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    crate::content::adapter::incoming::web::routes::configure_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
