use std::sync::Arc;

use actix_web::{
    HttpResponse, get,
    web::{Data as State, Query},
};
use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::dashboard::{DashboardDTO, DashboardQuery};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::domain::error::AppError;
use crate::domain::services::dashboard::DashboardService;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(dashboard);
}

#[utoipa::path(
    params(DashboardQuery),
    responses(
        (status = 200, body = DashboardDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError),
        (status = 502, body = AppError, example = json!(AppError::example_502())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Admin"
)]
#[get("/admin/dashboard")]
pub async fn dashboard(
    auth: Authenticated,
    query: Query<DashboardQuery>,
    dashboard_service: State<Arc<dyn DashboardService>>,
) -> ApiResult {
    let dashboard = dashboard_service
        .dashboard(auth.context(), query.limit, query.view)
        .await?;

    Ok(HttpResponse::Ok().json(DashboardDTO::from(dashboard)))
}
