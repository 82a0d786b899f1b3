use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::AUTH_COOKIE;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{CredentialsDTO, RegisterDTO, SignedInDTO};

use actix_web::{
    HttpResponse,
    cookie::{Cookie, SameSite},
    post,
    web::Data as State,
};

use serde_json::json;
use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(login).service(logout).service(register);
}

fn auth_cookie(value: &str) -> Cookie<'_> {
    Cookie::build(AUTH_COOKIE, value)
        .http_only(true)
        .secure(true)
        .path("/api")
        .same_site(SameSite::Strict)
        .finish()
}

#[utoipa::path(
    responses(
        (status = 200, body = SignedInDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Json<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let signed_in = account_service.login(payload.into_inner().into()).await?;

    let cookie = auth_cookie(&signed_in.access).into_owned();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(SignedInDTO::from(signed_in)))
}

#[utoipa::path(
    responses((status = 200, description = "Session cookie cleared")),
    tag = "Account"
)]
#[post("/logout")]
pub async fn logout() -> ApiResult {
    let mut cookie = auth_cookie("");
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "message": "Logged out." })))
}

#[utoipa::path(
    responses(
        (status = 201, description = "Farmer account registered"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = RegisterDTO,
    tag = "Account"
)]
#[post("/register")]
pub async fn register(
    payload: Json<RegisterDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.register(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(json!({ "message": "Registration successful." })))
}
