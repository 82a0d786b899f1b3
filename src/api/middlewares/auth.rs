use crate::domain::error::AppError;
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, err, ok};
use std::sync::Arc;

pub static AUTH_COOKIE: &str = "Authorization";

/// The verified caller. Handlers pass the inner context down to every
/// upstream call.
#[derive(Debug)]
pub struct Authenticated(pub AuthContext);

impl Authenticated {
    pub fn context(&self) -> &AuthContext {
        &self.0
    }
}

fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    if let Some(cookie) = req.cookie(AUTH_COOKIE) {
        return Ok(cookie.value().trim().to_string());
    }

    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let value = value.to_str().map_err(|_| AppError::Unauthorized())?.trim();

        return match value.strip_prefix("Bearer") {
            Some(token) => Ok(token.trim().to_string()),
            None => Err(AppError::Unauthorized()),
        };
    }

    Err(AppError::Unauthorized())
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Authenticated, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(jsonwebtoken_service) = req.app_data::<web::Data<Arc<dyn JsonWebTokenService>>>()
        else {
            return err(AppError::InternalError().trace("JsonWebTokenService is not defined"));
        };

        match get_token(req).and_then(|token| {
            jsonwebtoken_service
                .validate_token(&token)
                .map(|claims| AuthContext { token, claims })
        }) {
            Ok(context) => ok(Authenticated(context)),
            Err(error) => err(error),
        }
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        cookie::Cookie,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };

    use crate::services::jsonwebtoken::JsonWebTokenServiceImpl;
    use crate::tests::utils::token::{TEST_SECRET, access_token};

    use super::*;

    async fn index(auth: Authenticated) -> impl Responder {
        HttpResponse::Ok().body(auth.context().user_id().to_string())
    }

    use rstest::*;

    #[fixture]
    fn jwt_service() -> Arc<dyn JsonWebTokenService> {
        Arc::new(JsonWebTokenServiceImpl::new(TEST_SECRET))
    }

    enum Carrier {
        Cookie,
        Header,
    }

    async fn send_req(
        name: &str,
        value: &str,
        carrier: Carrier,
        jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
    ) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .route("/index", web::get().to(index))
                .app_data(web::Data::new(jsonwebtoken_service)),
        )
        .await;

        let mut req = TestRequest::get().uri("/index");

        match carrier {
            Carrier::Cookie => {
                req = req.cookie(Cookie::build(name, value).path("/").finish());
            }
            Carrier::Header => {
                req = req.insert_header((name, format!("Bearer {value}")));
            }
        }

        let res = req.send_request(&app).await;
        let status = res.status();
        let body = test::read_body(res).await;

        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[rstest]
    #[case::cookie(Carrier::Cookie)]
    #[case::header(Carrier::Header)]
    #[actix_web::test]
    async fn test_invalid_token(
        jwt_service: Arc<dyn JsonWebTokenService>,
        #[case] carrier: Carrier,
    ) {
        let (status, _) = send_req(
            "Authorization",
            "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzUxMiJ9",
            carrier,
            jwt_service,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case::cookie(Carrier::Cookie)]
    #[case::header(Carrier::Header)]
    #[actix_web::test]
    async fn test_missing_token(
        jwt_service: Arc<dyn JsonWebTokenService>,
        #[case] carrier: Carrier,
    ) {
        let (status, _) = send_req("Auth", &access_token(7), carrier, jwt_service).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case::cookie(Carrier::Cookie)]
    #[case::header(Carrier::Header)]
    #[actix_web::test]
    async fn test_authorized_access(
        jwt_service: Arc<dyn JsonWebTokenService>,
        #[case] carrier: Carrier,
    ) {
        let (status, body) =
            send_req("Authorization", &access_token(7), carrier, jwt_service).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "7");
    }
}
