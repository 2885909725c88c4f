use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotifyLevel::Success => "ok",
            NotifyLevel::Error => "error",
            NotifyLevel::Info => "info",
        };
        f.write_str(label)
    }
}

/// Transient, user-facing notices (toasts). Never part of chat history.
pub trait Notifier {
    fn notify(&self, message: &str, level: NotifyLevel);
}

/// Prints notices to stderr and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Error => log::warn!("{}", message),
            _ => log::debug!("{}", message),
        }
        eprintln!("[{}] {}", level, message);
    }
}
