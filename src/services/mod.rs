pub mod email_service;
pub mod llm_service;
pub mod summary_service;
