use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub trait Clipboard {
    fn write_text(&self, text: &str) -> io::Result<()>;
}

/// Copies through the terminal with the OSC 52 escape sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
