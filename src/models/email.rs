use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmailRequest {
    pub summary: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmailResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EmailPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One message handed to the mail relay.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl fmt::Display for OutgoingEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Email:")?;
        writeln!(f, "  From: {}", self.from)?;
        writeln!(f, "  To: {}", self.to)?;
        writeln!(f, "  Subject: {}", self.subject)?;
        write!(f, "  Body: {} bytes", self.body.len())
    }
}
