//! Streak computation.
//!
//! Pure functions of (habit type, creation date, log dates, today). Nothing
//! here touches the database or the clock; callers pass both in.

pub mod build;
pub mod quit;

use crate::models::habit_type::HabitType;
use crate::models::streak::StreakStats;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Compute current and longest streak for one habit.
///
/// `log_dates` may contain duplicates and be in any order.
pub fn compute_streaks(
    habit_type: HabitType,
    created_on: NaiveDate,
    log_dates: &[NaiveDate],
    today: NaiveDate,
) -> StreakStats {
    let dates: BTreeSet<NaiveDate> = log_dates.iter().copied().collect();

    match habit_type {
        HabitType::Build => build::build_streaks(&dates, today),
        HabitType::Quit => quit::quit_streaks(created_on, &dates, today),
    }
}

/// Whole days from `earlier` to `later`, clamped into `u32`.
pub(crate) fn days_between(earlier: NaiveDate, later: NaiveDate) -> u32 {
    (later - earlier).num_days().clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn duplicates_and_order_do_not_matter() {
        let a = compute_streaks(HabitType::Build, ago(30), &[ago(0), ago(1), ago(2)], today());
        let b = compute_streaks(
            HabitType::Build,
            ago(30),
            &[ago(2), ago(0), ago(1), ago(1), ago(0)],
            today(),
        );
        assert_eq!(a, b);
        assert_eq!(a, StreakStats::new(3, 3));
    }

    #[test]
    fn same_inputs_same_output() {
        let logs = [ago(9), ago(5), ago(4)];
        for ty in [HabitType::Build, HabitType::Quit] {
            let first = compute_streaks(ty, ago(12), &logs, today());
            let second = compute_streaks(ty, ago(12), &logs, today());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn longest_never_below_current() {
        // every subset of the last 8 days, for both habit types
        for mask in 0u32..256 {
            let logs: Vec<NaiveDate> = (0..8)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| ago(i as i64))
                .collect();

            for ty in [HabitType::Build, HabitType::Quit] {
                let s = compute_streaks(ty, ago(7), &logs, today());
                assert!(
                    s.longest_streak >= s.current_streak,
                    "{ty} mask={mask:08b} gave {s:?}"
                );
            }
        }
    }

    #[test]
    fn days_between_clamps_negative() {
        assert_eq!(days_between(ago(0), ago(3)), 0);
        assert_eq!(days_between(ago(3), ago(0)), 3);
    }
}
