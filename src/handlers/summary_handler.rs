use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use crate::models::error_response::ErrorResponse;
use crate::models::summary::{SummarizeRequest, SummarizeResponse};
use crate::routes::app_state::AppState;
use crate::services::llm_service::GenerationError;
use crate::services::summary_service;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit reached. Please wait a bit before retrying.";
pub const SUMMARIZE_FAILED_MESSAGE: &str = "AI summarization failed.";

pub async fn handle_summarize_request(
    data: web::Data<AppState>,
    req_body: web::Json<SummarizeRequest>,
) -> HttpResponse {
    let request = req_body.into_inner();
    info!(
        "Received summarize request: {} transcript chars, prompt {:?}",
        request.transcript.len(),
        request.prompt
    );

    match summary_service::summarize(data.generator.as_ref(), &request.transcript, &request.prompt).await {
        Ok(summary) => HttpResponse::Ok().json(SummarizeResponse { summary }),
        Err(GenerationError::RateLimited) => {
            warn!("Summarization rate limited by provider");
            HttpResponse::TooManyRequests().json(ErrorResponse::new(RATE_LIMIT_MESSAGE))
        }
        Err(e) => {
            error!("Summarization error: {:?}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(SUMMARIZE_FAILED_MESSAGE))
        }
    }
}
