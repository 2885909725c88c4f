use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use transcript_chat::chat::clipboard::Osc52Clipboard;
use transcript_chat::chat::format::{format_file_size, format_time};
use transcript_chat::chat::notifier::TerminalNotifier;
use transcript_chat::chat::{ChatSession, ChatState, HttpApiClient};
use transcript_chat::config::{self, ClientConfig};
use transcript_chat::models::chat::{Message, Role};

const HELP: &str = "Commands:
  <text>              ask about the attached files
  /attach <path>...   attach transcript files (quote paths with spaces)
  /remove <n>         remove the n-th attached file
  /files              list attached files
  /summarize          summarize all attached files
  /copy               copy the latest reply
  /summary            show the current summary
  /edit <text>        replace the summary before emailing
  /editor             toggle the summary editor view
  /email <address>    email the summary
  /help               show this help
  /quit               exit";

#[derive(Debug, PartialEq)]
enum Command {
    Send(String),
    Attach(Vec<PathBuf>),
    Remove(usize),
    Files,
    Summarize,
    Copy,
    ShowSummary,
    Edit(String),
    ToggleEditor,
    Email(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Command::Send(line.to_string()));
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let command = match name {
            "/attach" => Command::Attach(split_paths(rest)),
            "/remove" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Command::Remove(n),
                _ => Command::Unknown(line.to_string()),
            },
            "/files" => Command::Files,
            "/summarize" => Command::Summarize,
            "/copy" => Command::Copy,
            "/summary" => Command::ShowSummary,
            "/edit" => Command::Edit(rest.to_string()),
            "/editor" => Command::ToggleEditor,
            "/email" => Command::Email(rest.to_string()),
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Splits on whitespace, except inside single or double quotes.
fn split_paths(input: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in input.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => quote = Some(c),
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }
    paths
}

fn render_message(message: &Message) -> String {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "ai",
        Role::System => "--",
    };
    let mut out = format!("[{}] {}: {}", format_time(&message.timestamp), who, message.text);
    if !message.attached_files.is_empty() {
        let files = message
            .attached_files
            .iter()
            .map(|f| format!("{} ({})", f.name, format_file_size(f.size)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\n        attached: {}", files));
    }
    out
}

fn render_files(state: &ChatState) {
    if state.uploaded_files.is_empty() {
        println!("No files attached.");
        return;
    }
    println!("Attached Files ({})", state.uploaded_files.len());
    for (i, file) in state.uploaded_files.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, file.name, format_file_size(file.size));
    }
}

fn render_summary_editor(state: &ChatState) {
    if state.show_summary_editor && !state.summary.is_empty() {
        println!("---- Edit Summary (/edit <text> to replace) ----");
        println!("{}", state.summary);
        println!("------------------------------------------------");
    }
}

fn prompt(state: &ChatState) {
    let hint = if state.uploaded_files.is_empty() {
        "attach files first, then ask questions"
    } else {
        "ask anything about your files"
    };
    print!("({}) > ", hint);
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::init_logging();
    let cfg = ClientConfig::from_env().context("Failed to load client configuration")?;
    log::info!("Using API at {}", cfg.api_url);

    let mut session = ChatSession::new(
        HttpApiClient::from_config(&cfg),
        TerminalNotifier,
        Osc52Clipboard,
    );

    println!("Welcome to AI Transcript Chat");
    println!("Attach transcript files and ask questions, request summaries, or get insights.");
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rendered = 0;

    loop {
        prompt(session.state());
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Send(text) => {
                session.set_input(text);
                println!("AI is thinking...");
                session.send_message().await;
            }
            Command::Attach(paths) => session.attach_paths(&paths).await,
            Command::Remove(n) => match session.state().uploaded_files.get(n - 1).map(|f| f.id) {
                Some(id) => session.remove_file(id),
                None => println!("No attached file #{}", n),
            },
            Command::Files => render_files(session.state()),
            Command::Summarize => {
                if !session.state().uploaded_files.is_empty() {
                    println!("AI is thinking...");
                }
                session.summarize_attachments().await;
            }
            Command::Copy => {
                let text = session
                    .state()
                    .last_assistant_message()
                    .map(|m| m.text.clone())
                    .unwrap_or_else(|| session.state().summary.clone());
                if text.is_empty() {
                    println!("Nothing to copy yet.");
                } else {
                    session.copy_to_clipboard(&text);
                    if session.state().copied {
                        println!("Copied!");
                    }
                    session.expire_copied();
                }
            }
            Command::ShowSummary => {
                if session.state().summary.is_empty() {
                    println!("No summary yet.");
                } else {
                    println!("{}", session.state().summary);
                }
            }
            Command::Edit(text) => session.edit_summary(text),
            Command::ToggleEditor => session.toggle_summary_editor(),
            Command::Email(address) => {
                session.set_email(address);
                session.send_email().await;
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command: {} (try /help)", input),
        }

        for message in &session.state().messages[rendered..] {
            println!("{}", render_message(message));
        }
        rendered = session.state().messages.len();
        render_summary_editor(session.state());
    }

    Ok(())
}
