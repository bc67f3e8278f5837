use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Whether a habit is something to do more of, or something to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum HabitType {
    /// A log entry means the habit was performed that day
    Build,
    /// A log entry means a relapse on that day
    Quit,
}

impl HabitType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            HabitType::Build => "BUILD",
            HabitType::Quit => "QUIT",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "BUILD" => Some(HabitType::Build),
            "QUIT" => Some(HabitType::Quit),
            _ => None,
        }
    }

    /// Helper: accept user input in any case ("build", "Quit", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_uppercase())
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, HabitType::Quit)
    }
}

impl fmt::Display for HabitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_strings_are_uppercase() {
        assert_eq!(HabitType::Build.to_db_str(), "BUILD");
        assert_eq!(HabitType::from_db_str("QUIT"), Some(HabitType::Quit));
        assert_eq!(HabitType::from_db_str("quit"), None);
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(HabitType::from_code(" build "), Some(HabitType::Build));
        assert_eq!(HabitType::from_code("Quit"), Some(HabitType::Quit));
        assert_eq!(HabitType::from_code("stop"), None);
    }
}
