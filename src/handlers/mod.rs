pub mod email_handler;
pub mod summary_handler;
