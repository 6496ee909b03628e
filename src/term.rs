//! Terminal presentation helpers
//!
//! Colored status lines, bordered boxes, the startup banner, and interactive
//! prompt helpers. Presentation only; nothing here affects correctness.

use std::io::{self, Write};

use ansi_term::{Colour, Style};

/// Fixed interior width of bordered boxes
const BOX_WIDTH: usize = 60;

const BANNER: &str = r#" _____                                                                            _____
( ___ )                                                                          ( ___ )
 |   |~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|   |
 |   |  ____                   _                   _       ____    ____    _____  |   |
 |   | |  _ \   _ __    ___   | |_    ___    ___  | |_    |  _ \  |  _ \  |  ___| |   |
 |   | | |_) | | '__|  / _ \  | __|  / _ \  / __| | __|   | |_) | | | | | | |_    |   |
 |   | |  __/  | |    | (_) | | |_  |  __/ | (__  | |_    |  __/  | |_| | |  _|   |   |
 |   | |_|     |_|     \___/   \__|  \___|  \___|  \__|   |_|     |____/  |_|     |   |
 |   |                                                                            |   |
 |   |                                                          EST. 24 Oct 2025  |   |
 |   |                                                             Version 1.0.5  |   |
 |___|~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|___|
(_____)                                                                          (_____)"#;

/// Kinds of status lines, each with its own icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
    Lock,
    Time,
}

impl Status {
    fn icon(self) -> &'static str {
        match self {
            Status::Info => "🔵",
            Status::Success => "✅",
            Status::Warning => "⚠️",
            Status::Error => "❌",
            Status::Lock => "🔒",
            Status::Time => "⏱️",
        }
    }

    fn colour(self) -> Colour {
        match self {
            Status::Info => Colour::Cyan,
            Status::Success => Colour::Green,
            Status::Warning => Colour::Yellow,
            Status::Error => Colour::Red,
            Status::Lock => Colour::Green,
            Status::Time => Colour::Cyan,
        }
    }
}

/// Print the ASCII art banner
pub fn print_banner() {
    println!("{}", Colour::Cyan.paint(BANNER));
}

/// Print a formatted status message with an icon
pub fn print_status(status: Status, message: &str) {
    println!(
        "{}",
        status
            .colour()
            .paint(format!("{} {}", status.icon(), message))
    );
}

/// Print text in a fixed-width bordered box, one box line per input line
pub fn print_box(text: &str, colour: Colour) {
    println!("{}", colour.paint(format!("╔{}╗", "═".repeat(BOX_WIDTH))));

    for line in text.lines() {
        let padding = BOX_WIDTH.saturating_sub(line.chars().count() + 2);
        println!(
            "{}",
            colour.paint(format!("║ {}{} ║", line, " ".repeat(padding)))
        );
    }

    println!("{}", colour.paint(format!("╚{}╝", "═".repeat(BOX_WIDTH))));
}

/// Print a bold label and read one line from stdin.
///
/// The trailing newline is stripped; everything else is kept verbatim
/// (passwords may legitimately contain leading or trailing spaces).
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", Style::new().bold().paint(label));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a yes/no question; only an exact (case-insensitive) "yes" counts
pub fn confirm(question: &str, colour: Colour) -> io::Result<bool> {
    print!("{}", colour.paint(question));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("yes"))
}

/// Set the terminal window title via the OSC 0 escape sequence
pub fn set_window_title(title: &str) {
    print!("\x1b]0;{}\x07", title);
    let _ = io::stdout().flush();
}
