use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;

use transcript_chat::config::{self, ServerConfig};
use transcript_chat::routes::{self, app_state::AppState};
use transcript_chat::services::email_service::SmtpRelay;
use transcript_chat::services::llm_service::GeminiClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    config::init_logging();
    let cfg = ServerConfig::from_env().context("Failed to load server configuration")?;

    let mailer = SmtpRelay::from_config(&cfg).context("Failed to create SMTP transport")?;
    let state = AppState {
        generator: Arc::new(GeminiClient::from_config(&cfg)),
        mailer: Arc::new(mailer),
        sender: cfg.email_user.clone(),
    };

    log::info!("Starting server on http://{}:{}", cfg.host, cfg.port);
    log::info!("Accepting cross-origin requests from {}", cfg.frontend_url);

    let frontend_url = cfg.frontend_url.clone();
    let json_limit = cfg.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&frontend_url))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .service(routes::api_scope(json_limit))
    })
    .bind((cfg.host.as_str(), cfg.port))
    .with_context(|| format!("Failed to bind {}:{}", cfg.host, cfg.port))?
    .run()
    .await?;

    Ok(())
}
