mod farmer;
mod form;

pub mod utils;

use std::sync::Arc;

use httpmock::MockServer;
use serde::Deserialize;
use serde_json::json;

use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test::TestRequest,
};

use crate::config::UpstreamConfig;
use crate::container::Container;
use crate::infrastructure::client::ApiClient;
use crate::tests::utils::token::{TEST_SECRET, access_token};

use rstest::*;

/// A portal wired to a mocked farm backend.
pub struct TestContext {
    pub upstream: MockServer,
    pub container: Arc<Container>,
}

#[fixture]
async fn context() -> TestContext {
    let upstream = MockServer::start_async().await;

    let client = ApiClient::new(&UpstreamConfig {
        base_url: upstream.url("/api"),
        timeout_secs: 5,
    })
    .unwrap();

    let container = Arc::new(Container::new(client, TEST_SECRET));

    TestContext {
        upstream,
        container,
    }
}

fn bearer(user_id: u64) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", access_token(user_id)))
}

async fn login_cookie<S, B>(app: &S, email: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(app)
        .await;

    let header = res.headers().get("set-cookie").unwrap();
    let cookie = header.to_str().unwrap();

    Cookie::parse_encoded(cookie.to_owned()).unwrap()
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
