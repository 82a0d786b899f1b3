use actix_web::http::{Method, StatusCode};
use actix_web::test::{self, TestRequest};
use httpmock::prelude::*;
use rstest::*;
use serde_json::{Value, json};

use crate::app;
use crate::tests::{Error, TestContext, bearer, context};

fn form_uri(id: &str, action: &str) -> String {
    format!("/api/v1/farmer-forms/{id}{action}")
}

fn request(method: Method, uri: &str) -> TestRequest {
    TestRequest::default()
        .method(method)
        .uri(uri)
        .insert_header(bearer(1))
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_create_farmer_through_every_step(#[future] context: TestContext) {
    let create = context
        .upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/farmers/").json_body(json!({
                "email": "grace@farm.io",
                "username": "grace.o",
                "first_name": "Grace",
                "last_name": "Okello",
                "phone_number": "+256 700 123456",
                "location": "Mbale",
                "farm_size": "2.5",
                "date_of_birth": "1990-04-21",
                "gender": "female",
                "password": "Abcdef12!",
                "confirm_password": "Abcdef12!"
            }));
            then.status(201).json_body(json!({
                "id": 31,
                "email": "grace@farm.io",
                "username": "grace.o",
                "first_name": "Grace",
                "last_name": "Okello",
                "farm_size": "2.50"
            }));
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({ "mode": "create" }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    assert_eq!(form["step"], "account");
    assert_eq!(form["password_strength"]["label"], "Empty");

    let steps = [
        json!({
            "email": "grace@farm.io",
            "username": "grace.o",
            "first_name": "Grace",
            "last_name": "Okello"
        }),
        json!({
            "phone_number": "+256 700 123456",
            "location": "Mbale",
            "farm_size": "2.5",
            "date_of_birth": "1990-04-21",
            "gender": "female"
        }),
    ];

    for fields in steps {
        let res = request(Method::PATCH, &form_uri(&id, ""))
            .set_json(json!({ "fields": fields }))
            .send_request(&app)
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = request(Method::POST, &form_uri(&id, "/next"))
            .send_request(&app)
            .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::PATCH, &form_uri(&id, ""))
            .set_json(json!({ "fields": { "password": "Abcdef12!", "confirm_password": "Abcdef12!" } }))
            .to_request(),
    )
    .await;

    assert_eq!(form["step"], "security");
    assert_eq!(form["all_valid"], true);
    assert_eq!(form["password_strength"]["label"], "Excellent");
    assert!(form["fields"].get("password").is_none());

    let res = request(Method::POST, &form_uri(&id, "/submit"))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let submitted: Value = test::read_body_json(res).await;
    assert_eq!(submitted["message"], "Farmer created successfully.");
    assert_eq!(submitted["farmer"]["id"], 31);

    create.assert_hits_async(1).await;

    let res = request(Method::GET, &form_uri(&id, ""))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_blocked_next_shows_every_error(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({ "mode": "create", "fields": { "username": "grace.o" } }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    assert_eq!(form["errors"], json!({}));

    let res = request(Method::POST, &form_uri(&id, "/next"))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.message, "Please fix the errors before continuing.");

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::GET, &form_uri(&id, "")).to_request(),
    )
    .await;

    assert_eq!(form["step"], "account");
    assert_eq!(form["alert"], "Please fix the errors before continuing.");
    assert_eq!(
        form["errors"],
        json!({
            "email": "Email is required",
            "first_name": "First name required",
            "last_name": "Last name required",
            "password": "Password required",
            "confirm_password": "Confirm password"
        })
    );
    assert_eq!(form["steps"][0]["has_errors"], true);
    assert_eq!(form["steps"][1]["has_errors"], false);
    assert_eq!(form["steps"][2]["has_errors"], true);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_live_errors_follow_touched_fields(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({ "mode": "create" }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::PATCH, &form_uri(&id, ""))
            .set_json(json!({ "fields": { "username": "ab" } }))
            .to_request(),
    )
    .await;

    assert_eq!(
        form["errors"],
        json!({ "username": "3-30 chars, letters/numbers . _ - only" })
    );
    assert_eq!(form["touched"], json!(["username"]));

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::PATCH, &form_uri(&id, ""))
            .set_json(json!({ "validation_mode": "submit" }))
            .to_request(),
    )
    .await;

    assert_eq!(form["errors"], json!({}));
    assert_eq!(form["can_advance"], false);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_edit_farmer_loaded_from_backend(#[future] context: TestContext) {
    context
        .upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/farmers/5/");
            then.status(200).json_body(json!({
                "id": 5,
                "email": "joe@farm.io",
                "username": "joe",
                "first_name": "Joe",
                "last_name": "Mukasa",
                "phone_number": null,
                "location": "Gulu",
                "farm_size": 4,
                "date_of_birth": null,
                "gender": "male",
                "role": "farmer"
            }));
        })
        .await;

    let update = context
        .upstream
        .mock_async(|when, then| {
            when.method(PUT).path("/api/farmers/5/").json_body(json!({
                "username": "joe",
                "first_name": "Joseph",
                "last_name": "Mukasa",
                "phone_number": "",
                "location": "Gulu",
                "farm_size": "4",
                "date_of_birth": "",
                "gender": "male"
            }));
            then.status(200).json_body(json!({
                "id": 5,
                "email": "joe@farm.io",
                "username": "joe",
                "first_name": "Joseph",
                "last_name": "Mukasa"
            }));
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({ "mode": "edit", "farmer_id": 5 }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    assert_eq!(form["fields"]["farm_size"], "4");
    assert_eq!(form["steps"].as_array().unwrap().len(), 2);
    assert_eq!(form["password_strength"], Value::Null);

    let res = request(Method::PATCH, &form_uri(&id, ""))
        .set_json(json!({ "fields": { "email": "new@farm.io" } }))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    request(Method::PATCH, &form_uri(&id, ""))
        .set_json(json!({ "fields": { "first_name": "Joseph" } }))
        .send_request(&app)
        .await;

    let res = request(Method::POST, &form_uri(&id, "/submit"))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    request(Method::POST, &form_uri(&id, "/next"))
        .send_request(&app)
        .await;

    let submitted: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, &form_uri(&id, "/submit")).to_request(),
    )
    .await;

    assert_eq!(submitted["message"], "Farmer updated successfully.");
    update.assert_async().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_rejected_submit_keeps_the_form(#[future] context: TestContext) {
    let create = context
        .upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/farmers/");
            then.status(400).json_body(json!({ "error": "Username taken" }));
        })
        .await;

    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({
                "mode": "create",
                "fields": {
                    "email": "grace@farm.io",
                    "username": "grace.o",
                    "first_name": "Grace",
                    "last_name": "Okello",
                    "password": "Abcdef12",
                    "confirm_password": "Abcdef12"
                }
            }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        request(Method::POST, &form_uri(&id, "/next"))
            .send_request(&app)
            .await;
    }

    let res = request(Method::POST, &form_uri(&id, "/submit"))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(
        err,
        Error {
            code: 400,
            message: "Username taken".to_string()
        }
    );

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::GET, &form_uri(&id, "")).to_request(),
    )
    .await;

    assert_eq!(form["step"], "security");
    assert_eq!(form["feedback"], "Username taken");
    assert_eq!(form["saving"], false);
    assert_eq!(form["fields"]["username"], "grace.o");

    create.assert_hits_async(1).await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_forms_are_private(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, Vec::new())).await;

    let form: Value = test::call_and_read_body_json(
        &app,
        request(Method::POST, "/api/v1/farmer-forms")
            .set_json(json!({ "mode": "create" }))
            .to_request(),
    )
    .await;
    let id = form["id"].as_str().unwrap().to_string();

    let res = TestRequest::get()
        .uri(&form_uri(&id, ""))
        .insert_header(bearer(2))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = TestRequest::get()
        .uri(&form_uri(&id, ""))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = request(Method::DELETE, &form_uri(&id, ""))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
