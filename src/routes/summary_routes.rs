use actix_web::{post, web, Responder};

use crate::models::summary::SummarizeRequest;
use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(summarize);
}

#[post("/summarize")]
async fn summarize(
    data: web::Data<AppState>,
    req_body: web::Json<SummarizeRequest>,
) -> impl Responder {
    crate::handlers::summary_handler::handle_summarize_request(data, req_body).await
}
