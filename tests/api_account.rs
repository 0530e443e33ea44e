mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use canteen_backend::api;
use canteen_backend::auth::AuthLayer;
use serde_json::Value;

#[actix_rt::test]
async fn register_then_login_issues_a_student_session() {
    let (state, _fixtures) = common::setup_state_with_fixtures();
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(state.auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/account/register")
        .set_json(serde_json::json!({
            "username": "meera",
            "phone": "9123456780"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/account/login")
        .set_json(serde_json::json!({ "username": "meera" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["role"], "student");
    let token = body["token"].as_str().expect("token string");

    // The issued token opens role-gated routes.
    let req = test::TestRequest::get()
        .uri("/menu")
        .insert_header((
            actix_web::http::header::AUTHORIZATION,
            format!("Bearer {token}"),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn duplicate_registration_is_rejected() {
    let (state, _fixtures) = common::setup_state_with_fixtures();
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(state.auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;

    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/account/register")
            .set_json(serde_json::json!({
                "username": "arjun",
                "phone": "9123456781"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_rt::test]
async fn login_with_unknown_account_fails() {
    let (state, _fixtures) = common::setup_state_with_fixtures();
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(state.auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/account/login")
        .set_json(serde_json::json!({ "username": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let (state, _fixtures) = common::setup_state_with_fixtures();
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(state.auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;

    let req = test::TestRequest::get().uri("/menu").to_request();
    let result = test::try_call_service(&app, req).await;
    let status = match result {
        Ok(r) => r.status(),
        Err(e) => e.as_response_error().status_code(),
    };
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/menu")
        .insert_header((
            actix_web::http::header::AUTHORIZATION,
            "Bearer not-a-real-token",
        ))
        .to_request();
    let result = test::try_call_service(&app, req).await;
    let status = match result {
        Ok(r) => r.status(),
        Err(e) => e.as_response_error().status_code(),
    };
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn health_endpoints_are_public() {
    let (state, _fixtures) = common::setup_state_with_fixtures();
    let app = test::init_service(
        App::new()
            .wrap(AuthLayer::new(state.auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state)),
    )
    .await;

    for uri in ["/", "/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
