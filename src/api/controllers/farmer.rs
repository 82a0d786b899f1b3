use std::sync::Arc;

use actix_web::{
    HttpResponse, delete, get,
    web::{Data as State, Path, Query},
};
use serde_json::json;
use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::farmer::{FarmerDTO, FarmerPageDTO, SearchQuery};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::domain::error::AppError;
use crate::domain::services::farmer::FarmerService;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(list_farmers)
        .service(get_farmer)
        .service(delete_farmer);
}

#[utoipa::path(
    params(SearchQuery),
    responses(
        (status = 200, body = FarmerPageDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 502, body = AppError, example = json!(AppError::example_502())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmers"
)]
#[get("/farmers")]
pub async fn list_farmers(
    auth: Authenticated,
    query: Query<SearchQuery>,
    farmer_service: State<Arc<dyn FarmerService>>,
) -> ApiResult {
    let page = farmer_service
        .search(auth.context(), &query.q, query.page)
        .await?;

    Ok(HttpResponse::Ok().json(FarmerPageDTO::from(page)))
}

#[utoipa::path(
    responses(
        (status = 200, body = FarmerDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmers"
)]
#[get("/farmers/{id}")]
pub async fn get_farmer(
    auth: Authenticated,
    id: Path<u64>,
    farmer_service: State<Arc<dyn FarmerService>>,
) -> ApiResult {
    let farmer = farmer_service.get(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FarmerDTO::from(farmer)))
}

#[utoipa::path(
    responses(
        (status = 200, description = "Farmer deleted"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmers"
)]
#[delete("/farmers/{id}")]
pub async fn delete_farmer(
    auth: Authenticated,
    id: Path<u64>,
    farmer_service: State<Arc<dyn FarmerService>>,
) -> ApiResult {
    farmer_service.delete(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Farmer deleted." })))
}
