
use std::cell::RefCell;
use std::io;

use async_trait::async_trait;
use mockall::mock;

use transcript_chat::chat::clipboard::Clipboard;
use transcript_chat::chat::{ApiClient, ApiError, NotifyLevel, Notifier};
use transcript_chat::models::email::{EmailPayload, EmailRequest};
use transcript_chat::models::summary::{SummarizePayload, SummarizeRequest};

mock! {
    pub Api {}
    #[async_trait]
    impl ApiClient for Api {
        async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizePayload, ApiError>;
        async fn send_email(&self, request: &EmailRequest) -> Result<EmailPayload, ApiError>;
    }
}

/// Keeps every notice so tests can assert on toasts.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(String, NotifyLevel)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(String, NotifyLevel)> {
        self.notices.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, NotifyLevel)> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        self.notices.borrow_mut().push((message.to_string(), level));
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    copied: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        RecordingClipboard {
            fail: true,
            ..Default::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "clipboard unavailable"));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

pub fn summary_payload(text: &str) -> SummarizePayload {
    SummarizePayload {
        summary: Some(text.to_string()),
        ..Default::default()
    }
}
