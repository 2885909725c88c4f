//! Headless chat core: state, transitions and the calls behind each user action.

pub mod client;
pub mod clipboard;
pub mod format;
pub mod notifier;
pub mod session;
pub mod state;
pub mod transcript;

pub use client::{ApiClient, ApiError, HttpApiClient};
pub use notifier::{NotifyLevel, Notifier};
pub use session::ChatSession;
pub use state::{Action, ChatState};
