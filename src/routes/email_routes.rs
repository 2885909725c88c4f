use actix_web::{post, web, Responder};

use crate::models::email::EmailRequest;
use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_email);
}

#[post("/email")]
async fn send_email(
    data: web::Data<AppState>,
    req_body: web::Json<EmailRequest>,
) -> impl Responder {
    crate::handlers::email_handler::handle_email_request(data, req_body).await
}
