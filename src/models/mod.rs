pub mod chat;
pub mod email;
pub mod error_response;
pub mod summary;
