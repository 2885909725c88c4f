use std::sync::Arc;

use crate::services::email_service::MailRelay;
use crate::services::llm_service::SummaryGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn SummaryGenerator>,
    pub mailer: Arc<dyn MailRelay>,
    /// Address summaries are sent from.
    pub sender: String,
}
