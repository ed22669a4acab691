use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetPortfolioError, PortfolioView,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public portfolio
///
/// Published rows only, every list ordered by rank.
#[utoipa::path(
    get,
    path = "/api/public/portfolio",
    tag = "public",
    responses(
        (status = 200, description = "Portfolio content", body = inline(SuccessResponse<PortfolioView>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/public/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_portfolio.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error reading portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
