use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

use transcript_chat::services::llm_service::{GeminiClient, GenerationError, SummaryGenerator};

const API_KEY: &str = "test-key";
const MODEL: &str = "gemini-1.5-flash";

/// Stands in for the Gemini endpoint: answers `status`/`body` once the path and
/// key look right.
async fn start_stub(status: u16, body: &'static str) -> String {
    let server = HttpServer::new(move || {
        App::new().default_service(web::to(move |req: HttpRequest, payload: String| async move {
            let expected_path = format!("/v1beta/models/{}:generateContent", MODEL);
            if req.path() != expected_path {
                return HttpResponse::NotFound().body(format!("unexpected path {}", req.path()));
            }
            let key = req
                .headers()
                .get("x-goog-api-key")
                .and_then(|v| v.to_str().ok());
            if key != Some(API_KEY) {
                return HttpResponse::Forbidden().body("missing key");
            }
            if !payload.contains("\"contents\"") {
                return HttpResponse::BadRequest().body("missing contents");
            }
            HttpResponse::build(StatusCode::from_u16(status).unwrap())
                .content_type("application/json")
                .body(body)
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

#[actix_web::test]
async fn test_generate_returns_candidate_text() {
    let base = start_stub(
        200,
        r###"{"candidates":[{"content":{"parts":[{"text":"## Revenue\n- Q1 grew 10%"}],"role":"model"}}]}"###,
    )
    .await;
    let client = GeminiClient::new(&base, API_KEY, MODEL);

    let text = client.generate("Summarize this").await;
    assert_eq!(text, Ok("## Revenue\n- Q1 grew 10%".to_string()));
}

#[actix_web::test]
async fn test_generate_classifies_rate_limit() {
    let base = start_stub(
        429,
        r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED","message":"Quota exceeded"}}"#,
    )
    .await;
    let client = GeminiClient::new(&base, API_KEY, MODEL);

    assert_eq!(client.generate("p").await, Err(GenerationError::RateLimited));
}

#[actix_web::test]
async fn test_generate_other_failures_are_provider_errors() {
    let base = start_stub(500, r#"{"error":{"code":500,"message":"internal"}}"#).await;
    let client = GeminiClient::new(&base, API_KEY, MODEL);
    assert!(matches!(
        client.generate("p").await,
        Err(GenerationError::ProviderError(_))
    ));

    let wrong_key = GeminiClient::new(&base, "other-key", MODEL);
    match wrong_key.generate("p").await {
        Err(GenerationError::ProviderError(msg)) => assert!(msg.contains("403")),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_generate_empty_output_is_an_error() {
    let base = start_stub(200, r#"{"candidates":[]}"#).await;
    let client = GeminiClient::new(&base, API_KEY, MODEL);
    assert!(matches!(
        client.generate("p").await,
        Err(GenerationError::ProviderError(_))
    ));
}
