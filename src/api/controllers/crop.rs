use std::sync::Arc;

use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{Data as State, Path, Query},
};
use serde_json::json;
use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::crop::{CropDTO, CropPageDTO, CropResponseDTO};
use crate::api::dto::farmer::SearchQuery;
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::crop::CropService;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(list_crops)
        .service(create_crop)
        .service(update_crop)
        .service(delete_crop)
        .service(toggle_harvested)
        .service(list_all_crops)
        .service(update_any_crop)
        .service(delete_any_crop);
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<CropResponseDTO>),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Crops"
)]
#[get("/crops")]
pub async fn list_crops(
    auth: Authenticated,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let crops = crop_service.list(auth.context()).await?;

    Ok(HttpResponse::Ok().json(
        crops
            .into_iter()
            .map(CropResponseDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    responses(
        (status = 201, body = CropResponseDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = CropDTO,
    security(("jsonwebtoken" = [])),
    tag = "Crops"
)]
#[post("/crops")]
pub async fn create_crop(
    auth: Authenticated,
    payload: Json<CropDTO>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let crop = crop_service
        .create(auth.context(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(CropResponseDTO::from(crop)))
}

#[utoipa::path(
    responses(
        (status = 200, body = CropResponseDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    request_body = CropDTO,
    security(("jsonwebtoken" = [])),
    tag = "Crops"
)]
#[put("/crops/{id}")]
pub async fn update_crop(
    auth: Authenticated,
    id: Path<u64>,
    payload: Json<CropDTO>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let crop = crop_service
        .update(auth.context(), id.into_inner(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(CropResponseDTO::from(crop)))
}

#[utoipa::path(
    responses(
        (status = 200, description = "Crop deleted"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Crops"
)]
#[delete("/crops/{id}")]
pub async fn delete_crop(
    auth: Authenticated,
    id: Path<u64>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    crop_service.delete(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Crop deleted." })))
}

#[utoipa::path(
    responses(
        (status = 200, body = CropResponseDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Crops"
)]
#[post("/crops/{id}/harvested")]
pub async fn toggle_harvested(
    auth: Authenticated,
    id: Path<u64>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let crop = crop_service
        .toggle_harvested(auth.context(), id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CropResponseDTO::from(crop)))
}

#[utoipa::path(
    params(SearchQuery),
    responses(
        (status = 200, body = CropPageDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Admin"
)]
#[get("/admin/crops")]
pub async fn list_all_crops(
    auth: Authenticated,
    query: Query<SearchQuery>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let page = crop_service
        .search_all(auth.context(), &query.q, query.page)
        .await?;

    Ok(HttpResponse::Ok().json(CropPageDTO::from(page)))
}

#[utoipa::path(
    responses(
        (status = 200, body = CropResponseDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    request_body = CropDTO,
    security(("jsonwebtoken" = [])),
    tag = "Admin"
)]
#[put("/admin/crops/{id}")]
pub async fn update_any_crop(
    auth: Authenticated,
    id: Path<u64>,
    payload: Json<CropDTO>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    let crop = crop_service
        .update_any(auth.context(), id.into_inner(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(CropResponseDTO::from(crop)))
}

#[utoipa::path(
    responses(
        (status = 200, description = "Crop deleted"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError)
    ),
    security(("jsonwebtoken" = [])),
    tag = "Admin"
)]
#[delete("/admin/crops/{id}")]
pub async fn delete_any_crop(
    auth: Authenticated,
    id: Path<u64>,
    crop_service: State<Arc<dyn CropService>>,
) -> ApiResult {
    crop_service
        .delete_any(auth.context(), id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Crop deleted." })))
}
