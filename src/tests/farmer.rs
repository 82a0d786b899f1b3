use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use httpmock::prelude::*;
use rstest::*;
use serde_json::{Value, json};

use crate::app;
use crate::tests::{Error, TestContext, bearer, context};

fn farmers(count: u64) -> Value {
    (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "email": format!("farmer{id}@farm.io"),
                "username": format!("farmer{id}"),
                "first_name": "Grace",
                "last_name": if id % 2 == 0 { "Okello" } else { "Mukasa" },
                "farm_size": id
            })
        })
        .collect()
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_list_farmers_filters_then_pages(#[future] context: TestContext) {
    let list = context
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/farmers/")
                .header_exists("authorization");
            then.status(200).json_body(farmers(20));
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let page: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri("/api/v1/farmers?q=OKELLO&page=1")
            .insert_header(bearer(1))
            .to_request(),
    )
    .await;

    assert_eq!(page["total"], 10);
    assert_eq!(page["page"], 1);
    assert_eq!(page["page_size"], 8);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["items"][0]["username"], "farmer18");
    assert_eq!(page["items"][0]["farm_size"], "18");

    list.assert_async().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_get_missing_farmer(#[future] context: TestContext) {
    context
        .upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/farmers/404/");
            then.status(404).json_body(json!({ "detail": "Not found." }));
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let res = TestRequest::get()
        .uri("/api/v1/farmers/404")
        .insert_header(bearer(1))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.message, "Not found.");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_farmer(#[future] context: TestContext) {
    let delete = context
        .upstream
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/farmers/3/");
            then.status(204);
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::delete()
            .uri("/api/v1/farmers/3")
            .insert_header(bearer(1))
            .to_request(),
    )
    .await;

    assert_eq!(body, json!({ "message": "Farmer deleted." }));
    delete.assert_async().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_upstream_failure_is_a_bad_gateway(#[future] context: TestContext) {
    context
        .upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/farmers/");
            then.status(500).body("<h1>Server Error</h1>");
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let res = TestRequest::get()
        .uri("/api/v1/farmers")
        .insert_header(bearer(1))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.message, "Request failed");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_farmers_require_a_token(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let res = TestRequest::get()
        .uri("/api/v1/farmers")
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = TestRequest::get()
        .uri("/api/v1/farmers/abc")
        .insert_header(bearer(1))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
