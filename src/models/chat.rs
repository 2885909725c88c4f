use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Name and size of a file as it was attached when a user message was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    pub attached_files: Vec<AttachedFile>,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            attached_files: Vec::new(),
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>, attached_files: Vec<AttachedFile>) -> Self {
        Message {
            attached_files,
            ..Message::new(Role::User, text)
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message::new(Role::Assistant, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Message::new(Role::System, text)
    }
}

/// A local text file the user attached to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub size: u64,
}

impl UploadedFile {
    /// Size is the byte length of the content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        UploadedFile {
            id: Uuid::new_v4(),
            name: name.into(),
            size: content.len() as u64,
            content,
        }
    }

    pub fn as_attached(&self) -> AttachedFile {
        AttachedFile {
            name: self.name.clone(),
            size: self.size,
        }
    }
}
