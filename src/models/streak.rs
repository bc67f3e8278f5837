use serde::Serialize;

/// Result of the streak computation for one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakStats {
    pub fn new(current_streak: u32, longest_streak: u32) -> Self {
        Self {
            current_streak,
            longest_streak,
        }
    }
}
