use actix_web::http::header;
use actix_web::http::{Method, StatusCode};
use actix_web::{test, web, App};
use serde_json::json;

use transcript_chat::routes;

use crate::{app_state, MockGenerator, MockRelay, JSON_LIMIT};

const FRONTEND: &str = "http://localhost:3000";

fn generator_replying() -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .times(0..=1)
        .returning(|_| Ok("## Revenue".to_string()));
    generator
}

#[actix_web::test]
async fn test_cors_allows_configured_origin_with_credentials() {
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(FRONTEND))
            .app_data(web::Data::new(app_state(generator_replying(), MockRelay::new())))
            .service(routes::api_scope(JSON_LIMIT)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .insert_header((header::ORIGIN, FRONTEND))
        .set_json(json!({"transcript": "t", "prompt": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), FRONTEND);
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[actix_web::test]
async fn test_cors_preflight_for_configured_origin() {
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(FRONTEND))
            .app_data(web::Data::new(app_state(MockGenerator::new(), MockRelay::new())))
            .service(routes::api_scope(JSON_LIMIT)),
    )
    .await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/email")
        .insert_header((header::ORIGIN, FRONTEND))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), FRONTEND);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_cors_refuses_other_origin() {
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(FRONTEND))
            .app_data(web::Data::new(app_state(generator_replying(), MockRelay::new())))
            .service(routes::api_scope(JSON_LIMIT)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .insert_header((header::ORIGIN, "http://evil.example.com"))
        .set_json(json!({"transcript": "t", "prompt": "p"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}
