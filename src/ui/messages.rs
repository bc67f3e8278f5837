use ansi_term::{Colour, Style};
use std::env;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        };
        colour.bold()
    }

    /// Warnings and errors go to stderr so `--json` output stays parseable.
    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn colors_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

fn render(level: Level, msg: &dyn fmt::Display, colored: bool) -> String {
    if colored {
        format!("{} {}", level.style().paint(level.icon()), msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let line = render(level, msg, colors_enabled());
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Section header, e.g. above the dashboard table
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{}\n", Colour::Blue.bold().paint(msg.to_string()));
    } else {
        println!("{msg}\n");
    }
}
