use std::path::{Path, PathBuf};

use log::{debug, error, info};
use uuid::Uuid;

use crate::chat::client::{ApiClient, ApiError};
use crate::chat::clipboard::Clipboard;
use crate::chat::notifier::{NotifyLevel, Notifier};
use crate::chat::state::{Action, ChatState};
use crate::chat::transcript::{build_transcript, NO_TRANSCRIPT, SUMMARY_PROMPT};
use crate::models::chat::UploadedFile;
use crate::models::email::EmailRequest;
use crate::models::summary::SummarizeRequest;

const DEFAULT_REPLY: &str = "I've processed your request.";
const DEFAULT_SUMMARY: &str = "Summary generated successfully.";

/// Drives one chat window: turns user actions into API calls and state updates.
///
/// Every operation that talks to the API is a no-op while a previous one is
/// still loading.
pub struct ChatSession<C, N, K> {
    state: ChatState,
    client: C,
    notifier: N,
    clipboard: K,
}

impl<C, N, K> ChatSession<C, N, K>
where
    C: ApiClient,
    N: Notifier,
    K: Clipboard,
{
    pub fn new(client: C, notifier: N, clipboard: K) -> Self {
        ChatSession {
            state: ChatState::default(),
            client,
            notifier,
            clipboard,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }

    /// Applies a state transition directly, for front-ends that own their own widgets.
    pub fn dispatch(&mut self, action: Action) {
        self.state.update(action);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(Action::InputChanged(text.into()));
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.dispatch(Action::EmailChanged(email.into()));
    }

    pub fn edit_summary(&mut self, summary: impl Into<String>) {
        self.dispatch(Action::SummaryEdited(summary.into()));
    }

    pub fn toggle_summary_editor(&mut self) {
        self.dispatch(Action::SummaryEditorToggled);
    }

    /// Reads the files as text and attaches them all, or none if any read fails.
    pub async fn attach_paths(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            return;
        }
        match read_files(paths).await {
            Ok(files) => self.attach(files),
            Err(e) => {
                error!("File upload error: {}", e);
                self.notifier.notify("Failed to read file(s)", NotifyLevel::Error);
            }
        }
    }

    pub fn attach(&mut self, files: Vec<UploadedFile>) {
        if files.is_empty() {
            return;
        }
        let count = files.len();
        self.state.update(Action::FilesAttached(files));
        self.notifier.notify(
            &format!("{} file(s) attached successfully!", count),
            NotifyLevel::Success,
        );
    }

    pub fn remove_file(&mut self, id: Uuid) {
        self.state.update(Action::FileRemoved(id));
        self.notifier.notify("File removed", NotifyLevel::Info);
    }

    /// Sends the current input with whatever is attached.
    pub async fn send_message(&mut self) {
        if self.state.is_loading {
            debug!("Ignoring send while a request is in flight");
            return;
        }
        let text = self.state.current_input.clone();
        if text.trim().is_empty() {
            return;
        }

        let transcript = build_transcript(&self.state.uploaded_files);
        let transcript = if transcript.is_empty() {
            NO_TRANSCRIPT.to_string()
        } else {
            transcript
        };

        if let Err(e) = self.request_reply(transcript, text, DEFAULT_REPLY).await {
            self.notifier
                .notify(&format!("Failed to send message: {}", e), NotifyLevel::Error);
        }
    }

    /// One-click summary of every attached transcript.
    pub async fn summarize_attachments(&mut self) {
        if self.state.is_loading {
            debug!("Ignoring summarize while a request is in flight");
            return;
        }
        if self.state.uploaded_files.is_empty() {
            self.notifier
                .notify("Please attach transcript files first", NotifyLevel::Error);
            return;
        }

        let transcript = build_transcript(&self.state.uploaded_files);
        match self
            .request_reply(transcript, SUMMARY_PROMPT.to_string(), DEFAULT_SUMMARY)
            .await
        {
            Ok(()) => self
                .notifier
                .notify("Summary generated successfully!", NotifyLevel::Success),
            Err(e) => self
                .notifier
                .notify(&format!("Failed to generate summary: {}", e), NotifyLevel::Error),
        }
    }

    async fn request_reply(
        &mut self,
        transcript: String,
        prompt: String,
        fallback: &str,
    ) -> Result<(), ApiError> {
        self.state.update(Action::MessageSubmitted(prompt.clone()));
        let request = SummarizeRequest { transcript, prompt };

        match self.client.summarize(&request).await {
            Ok(payload) => {
                let reply = payload.text().unwrap_or(fallback).to_string();
                info!("Received reply of {} chars", reply.len());
                self.state.update(Action::ReplyReceived(reply));
                Ok(())
            }
            Err(e) => {
                error!("Chat error: {}", e);
                self.state.update(Action::ReplyFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn copy_to_clipboard(&mut self, text: &str) {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.state.update(Action::Copied);
                self.notifier.notify("Copied to clipboard!", NotifyLevel::Success);
            }
            Err(e) => {
                error!("Clipboard error: {}", e);
                self.notifier.notify("Failed to copy", NotifyLevel::Error);
            }
        }
    }

    pub fn expire_copied(&mut self) {
        self.state.update(Action::CopyExpired);
    }

    /// Emails the (possibly edited) summary to the address in the email field.
    pub async fn send_email(&mut self) {
        if self.state.is_loading {
            debug!("Ignoring email while a request is in flight");
            return;
        }
        let email = self.state.email.trim().to_string();
        if email.is_empty() {
            self.notifier
                .notify("Please enter a recipient email", NotifyLevel::Error);
            return;
        }
        let summary = self.state.summary.trim().to_string();
        if summary.is_empty() {
            self.notifier
                .notify("Please generate a response first", NotifyLevel::Error);
            return;
        }

        self.state.update(Action::RequestStarted);
        let request = EmailRequest {
            summary,
            email: email.clone(),
        };

        match self.client.send_email(&request).await {
            Ok(_) => {
                self.notifier
                    .notify("Email sent successfully!", NotifyLevel::Success);
                self.state.update(Action::EmailSent(email));
            }
            Err(e) => {
                error!("Email send error: {}", e);
                self.notifier
                    .notify(&format!("Failed to send email: {}", e), NotifyLevel::Error);
                self.state.update(Action::EmailFailed(e.to_string()));
            }
        }
    }
}

async fn read_files(paths: &[PathBuf]) -> std::io::Result<Vec<UploadedFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        // Invalid UTF-8 is replaced rather than refused.
        let bytes = tokio::fs::read(path).await?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        files.push(UploadedFile::new(display_name(path), content));
    }
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
