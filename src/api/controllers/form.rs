use std::sync::Arc;

use actix_web::{
    HttpResponse, delete, get, patch, post,
    web::{Data as State, Path},
};
use utoipa_actix_web::service_config::ServiceConfig;
use uuid::Uuid;

use crate::api::dto::form::{FormDTO, OpenFormDTO, SubmittedDTO, UpdateFormDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::form::FarmerFormService;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(open_form)
        .service(get_form)
        .service(update_form)
        .service(next_step)
        .service(previous_step)
        .service(submit_form)
        .service(close_form);
}

#[utoipa::path(
    responses(
        (status = 201, body = FormDTO, description = "Form opened on its first step"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = OpenFormDTO,
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[post("/farmer-forms")]
pub async fn open_form(
    auth: Authenticated,
    payload: Json<OpenFormDTO>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let session = form_service
        .open(auth.context(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(FormDTO::from(session)))
}

#[utoipa::path(
    responses(
        (status = 200, body = FormDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[get("/farmer-forms/{id}")]
pub async fn get_form(
    auth: Authenticated,
    id: Path<Uuid>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let session = form_service.get(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormDTO::from(session)))
}

#[utoipa::path(
    responses(
        (status = 200, body = FormDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409()))
    ),
    request_body = UpdateFormDTO,
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[patch("/farmer-forms/{id}")]
pub async fn update_form(
    auth: Authenticated,
    id: Path<Uuid>,
    payload: Json<UpdateFormDTO>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let session = form_service
        .update(auth.context(), id.into_inner(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(FormDTO::from(session)))
}

#[utoipa::path(
    responses(
        (status = 200, body = FormDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::UnprocessableEntity("Please fix the errors before continuing.")))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[post("/farmer-forms/{id}/next")]
pub async fn next_step(
    auth: Authenticated,
    id: Path<Uuid>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let session = form_service.next(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormDTO::from(session)))
}

#[utoipa::path(
    responses(
        (status = 200, body = FormDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[post("/farmer-forms/{id}/back")]
pub async fn previous_step(
    auth: Authenticated,
    id: Path<Uuid>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let session = form_service.back(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormDTO::from(session)))
}

#[utoipa::path(
    responses(
        (status = 200, body = SubmittedDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::UnprocessableEntity("Please resolve all validation errors."))),
        (status = 502, body = AppError, example = json!(AppError::example_502())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[post("/farmer-forms/{id}/submit")]
pub async fn submit_form(
    auth: Authenticated,
    id: Path<Uuid>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    let submitted = form_service.submit(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SubmittedDTO::from(submitted)))
}

#[utoipa::path(
    responses(
        (status = 204, description = "Form discarded"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Farmer form"
)]
#[delete("/farmer-forms/{id}")]
pub async fn close_form(
    auth: Authenticated,
    id: Path<Uuid>,
    form_service: State<Arc<dyn FarmerFormService>>,
) -> ApiResult {
    form_service.close(auth.context(), id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
