use crate::models::chat::UploadedFile;

/// Prompt sent by the one-click "summarize all attachments" action.
pub const SUMMARY_PROMPT: &str = "Please provide a comprehensive summary of the attached transcript(s)";

/// Transcript sent with a chat message when nothing is attached.
pub const NO_TRANSCRIPT: &str = "No transcript provided";

/// Concatenates every attached file under a `=== name ===` header.
pub fn build_transcript(files: &[UploadedFile]) -> String {
    files
        .iter()
        .map(|file| format!("=== {} ===\n{}\n\n", file.name, file.content))
        .collect()
}
