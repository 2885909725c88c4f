mod cors_tests;
mod gemini_client_tests;

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use transcript_chat::models::email::OutgoingEmail;
use transcript_chat::routes::{self, app_state::AppState};
use transcript_chat::services::email_service::{MailError, MailRelay};
use transcript_chat::services::llm_service::{GenerationError, SummaryGenerator};

pub const JSON_LIMIT: usize = 1024 * 1024;
pub const SENDER: &str = "summaries@example.com";

mock! {
    pub Generator {}
    #[async_trait]
    impl SummaryGenerator for Generator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
    }
}

mock! {
    pub Relay {}
    #[async_trait]
    impl MailRelay for Relay {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
    }
}

pub fn app_state(generator: MockGenerator, relay: MockRelay) -> AppState {
    AppState {
        generator: Arc::new(generator),
        mailer: Arc::new(relay),
        sender: SENDER.to_string(),
    }
}

/// Posts a JSON body through the `/api` scope and returns status and decoded body.
pub async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(routes::api_scope(JSON_LIMIT)),
    )
    .await;
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub async fn post_raw(state: AppState, uri: &str, payload: &'static str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(routes::api_scope(JSON_LIMIT)),
    )
    .await;
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::json())
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
