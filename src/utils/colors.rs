/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Streak color:
/// 0 → grey
/// current == longest (personal best) → green
/// otherwise → yellow
pub fn color_for_streak(current: u32, longest: u32) -> &'static str {
    if current == 0 {
        GREY
    } else if current >= longest {
        GREEN
    } else {
        YELLOW
    }
}

/// BUILD habits in cyan, QUIT habits in red.
pub fn color_for_type(is_quit: bool) -> &'static str {
    if is_quit { RED } else { CYAN }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
