use uuid::Uuid;

use crate::models::chat::{Message, Role, UploadedFile};

/// Everything a chat window shows. Mutated only through [`ChatState::update`].
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub uploaded_files: Vec<UploadedFile>,
    pub current_input: String,
    /// Latest assistant reply, possibly edited by the user.
    pub summary: String,
    pub email: String,
    pub is_loading: bool,
    pub show_summary_editor: bool,
    pub copied: bool,
}

#[derive(Debug, Clone)]
pub enum Action {
    InputChanged(String),
    EmailChanged(String),
    SummaryEdited(String),
    SummaryEditorToggled,
    FilesAttached(Vec<UploadedFile>),
    FileRemoved(Uuid),
    /// User text goes out; the current attachments are snapshotted onto it.
    MessageSubmitted(String),
    RequestStarted,
    ReplyReceived(String),
    ReplyFailed(String),
    EmailSent(String),
    EmailFailed(String),
    Copied,
    CopyExpired,
}

impl ChatState {
    pub fn update(&mut self, action: Action) {
        match action {
            Action::InputChanged(text) => self.current_input = text,
            Action::EmailChanged(email) => self.email = email,
            Action::SummaryEdited(summary) => self.summary = summary,
            Action::SummaryEditorToggled => self.show_summary_editor = !self.show_summary_editor,
            Action::FilesAttached(files) => {
                if files.is_empty() {
                    return;
                }
                let names = files
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.messages.push(Message::system(format!(
                    "📄 Attached {} file(s): {}",
                    files.len(),
                    names
                )));
                self.uploaded_files.extend(files);
            }
            Action::FileRemoved(id) => self.uploaded_files.retain(|f| f.id != id),
            Action::MessageSubmitted(text) => {
                if self.is_loading {
                    return;
                }
                let attached = self.uploaded_files.iter().map(UploadedFile::as_attached).collect();
                self.messages.push(Message::user(text, attached));
                self.current_input.clear();
                self.is_loading = true;
            }
            Action::RequestStarted => self.is_loading = true,
            Action::ReplyReceived(text) => {
                self.messages.push(Message::assistant(text.clone()));
                self.summary = text;
                self.is_loading = false;
            }
            Action::ReplyFailed(reason) => {
                self.messages.push(Message::assistant(format!(
                    "⚠️ Sorry, I encountered an error: {}",
                    reason
                )));
                self.is_loading = false;
            }
            Action::EmailSent(recipient) => {
                self.messages.push(Message::system(format!(
                    "📧 Email sent successfully to {}",
                    recipient
                )));
                self.email.clear();
                self.is_loading = false;
            }
            Action::EmailFailed(reason) => {
                self.messages.push(Message::system(format!("⚠️ Failed to send email: {}", reason)));
                self.is_loading = false;
            }
            Action::Copied => self.copied = true,
            Action::CopyExpired => self.copied = false,
        }
    }

    pub fn last_assistant_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }
}
