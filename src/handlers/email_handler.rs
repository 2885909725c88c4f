use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::models::email::{EmailRequest, EmailResponse};
use crate::models::error_response::ErrorResponse;
use crate::routes::app_state::AppState;
use crate::services::email_service;

pub const EMAIL_SENT_MESSAGE: &str = "✅ Email sent!";
pub const EMAIL_FAILED_MESSAGE: &str = "Email sending failed.";

pub async fn handle_email_request(
    data: web::Data<AppState>,
    req_body: web::Json<EmailRequest>,
) -> HttpResponse {
    let request = req_body.into_inner();
    info!("Sending summary ({} chars) to {}", request.summary.len(), request.email);

    let outgoing = email_service::summary_email(&data.sender, &request.email, &request.summary);
    match data.mailer.send(&outgoing).await {
        Ok(()) => HttpResponse::Ok().json(EmailResponse {
            message: EMAIL_SENT_MESSAGE.to_string(),
        }),
        Err(e) => {
            error!("Email error for {}: {:?}", request.email, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(EMAIL_FAILED_MESSAGE))
        }
    }
}
